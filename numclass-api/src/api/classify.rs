//! Number classification endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use numclass_common::types::ClassificationResult;
use numclass_common::{classify, parse_number};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::services::fun_fact_or_fallback;
use crate::AppState;

/// Query parameters for classification
///
/// `number` is kept as the raw string so rejected input can be echoed back
/// verbatim. A missing parameter is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub number: Option<String>,
}

/// GET /api/classify-number?number=<raw>
///
/// Parses the raw value, runs the predicates on the blocking pool while the
/// fun fact lookup is in flight, and combines both into one response.
/// A failed lookup still yields 200 with the fallback fact.
pub async fn classify_number(
    State(state): State<AppState>,
    Query(query): Query<ClassifyQuery>,
) -> ApiResult<Json<ClassificationResult>> {
    let raw = query.number.unwrap_or_default();
    let n = parse_number(&raw)?;
    debug!(number = n, "Classifying number");

    let (classification, fun_fact) = tokio::join!(
        tokio::task::spawn_blocking(move || classify(n)),
        fun_fact_or_fallback(state.facts.as_ref(), n),
    );
    let classification = classification
        .map_err(|e| ApiError::Internal(format!("Classification task failed: {}", e)))?;

    Ok(Json(ClassificationResult::new(classification, fun_fact)))
}
