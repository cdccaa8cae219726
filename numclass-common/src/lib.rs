//! # numclass Common Library
//!
//! Shared code for the numclass service crates:
//! - Number parsing and the classification predicates
//! - API response types (classification result, error envelope)
//! - Configuration loading and resolution
//! - Common error type

pub mod classify;
pub mod config;
pub mod error;
pub mod types;

pub use classify::{classify, parse_number, Classification, NumberProperty};
pub use error::{Error, Result};
