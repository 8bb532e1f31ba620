//! Beer Types - Pure type definitions for the beer catalogue
//!
//! This crate contains only plain data records with serde support and no
//! async runtime dependencies, so every layer of the catalogue can share them.

pub mod beer;
pub mod review;

pub use beer::*;
pub use review::*;

/// Identifier of a stored beer
pub type BeerId = u64;

/// Identifier of a stored review. Independent of the beer id space.
pub type ReviewId = u64;
