//! HTTP handlers

pub mod beers;
pub mod error;
pub mod health;
pub mod reviews;

pub use error::ApiError;
pub use health::health;
