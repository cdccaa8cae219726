//! HTTP API handlers for numclass-api

pub mod classify;
pub mod health;

pub use classify::{classify_number, ClassifyQuery};
pub use health::health_routes;
