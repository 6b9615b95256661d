//! Service adapters: concrete providers behind the ports.

pub mod http;
pub mod memory;
pub mod runtime;

pub use http::HttpContentApi;
pub use memory::MemoryContentApi;
pub use runtime::FetchRuntime;
