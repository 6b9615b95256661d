//! Service layer: ports declare what the app needs, adapters provide it.

pub mod adapters;
pub mod ports;
