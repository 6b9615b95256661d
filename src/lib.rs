//! sitepad - template-driven file-tree viewer/editor core
//!
//! Module structure:
//! - dom: retained document model (arena tree, queries, events, observers)
//! - template: markup template compiler and evaluator
//! - models: listing data model (TreeNode)
//! - kernel: headless application core (state/action/effect + services)
//! - app: shell wiring (walker, watcher, built-in templates)
//! - router: navigation hash codec

pub mod app;
pub mod dom;
pub mod kernel;
pub mod logging;
pub mod models;
pub mod router;
pub mod template;
