//! Service status endpoint
//!
//! Reports liveness, the build that is running, and which fun fact source
//! the classifier is wired to. Never calls the trivia service itself.

use axum::{extract::State, routing::get, Json, Router};
use numclass_common::types::NO_FUN_FACT;
use serde::Serialize;

use crate::AppState;

/// Compile-time identification captured by build.rs
#[derive(Debug, Serialize)]
pub struct BuildIdentity {
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildIdentity {
    pub fn current() -> Self {
        Self {
            git_hash: env!("GIT_HASH"),
            build_timestamp: env!("BUILD_TIMESTAMP"),
            build_profile: env!("BUILD_PROFILE"),
        }
    }
}

/// GET /health body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub build: BuildIdentity,
    /// `source_id()` of the configured fact provider
    pub fact_source: &'static str,
    /// Text returned in `fun_fact` when the source fails
    pub fact_fallback: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        build: BuildIdentity::current(),
        fact_source: state.facts.source_id(),
        fact_fallback: NO_FUN_FACT,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
