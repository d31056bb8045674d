//! Infrastructure adapters - concrete implementations of the outbound
//! ports.

pub mod http;
pub mod storage;

pub use http::HttpApiClient;
pub use storage::{FileStorage, MemoryStorage};
