//! Core types shared by the histobin crates
//!
//! This crate holds the pieces every other crate in the workspace depends on:
//! the unified [`Error`] type and the [`NumericKey`] conversion used by
//! range-based binnings.

pub mod error;
pub mod key;

pub use error::{Error, Result};
pub use key::NumericKey;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
