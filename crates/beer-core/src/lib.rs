//! Beer Core Library
//!
//! Storage abstraction for the beer catalogue: the error taxonomy, the
//! `CatalogStorage` port that request layers depend on, and the in-memory
//! backend built from an identity allocator and two record stores.

// Re-export pure types from beer-types
pub use beer_types::*;

#[cfg(any(test, feature = "testing"))]
pub mod conformance;
pub mod error;
pub mod memory;
pub mod ports;

pub use error::{CatalogError, Result};
pub use memory::MemoryStorage;
pub use ports::CatalogStorage;
