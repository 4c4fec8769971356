//! Configuration module for binvis
//!
//! Provides types and parsing for `binvis.toml` configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
