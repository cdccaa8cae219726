//! numclass-api library interface
//!
//! Exposes the router and state so integration tests can drive the service
//! with a substituted fact provider.

use axum::Router;
use numclass_common::config::ServiceConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use crate::services::{FactError, FactProvider, NumbersApiClient};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Source of fun facts attached to each classification
    pub facts: Arc<dyn FactProvider>,
}

impl AppState {
    /// Create new application state
    pub fn new(facts: Arc<dyn FactProvider>) -> Self {
        Self { facts }
    }

    /// State backed by the HTTP trivia client described by `config`
    pub fn from_config(config: &ServiceConfig) -> Result<Self, FactError> {
        let client = NumbersApiClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }
}

/// Build application router
///
/// CORS mirrors the caller's origin, method and headers and allows
/// credentials, so browser pages on any origin can call the API.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/classify-number", get(api::classify_number))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
