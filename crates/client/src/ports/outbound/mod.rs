//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application code to interact with the backend
//! and local storage without depending on concrete implementations.

pub mod api_port;
pub mod storage;

pub use api_port::{ApiError, RawApiPort};
pub use storage::{storage_keys, StorageProvider, TokenProvider};

#[cfg(any(test, feature = "testing"))]
pub use api_port::MockRawApiPort;
