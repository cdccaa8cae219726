//! Fun fact enrichment
//!
//! Classification results carry a trivia string fetched from an external
//! numeric-trivia service. The lookup sits behind [`FactProvider`] so the
//! handler never touches the network directly and tests can substitute a
//! deterministic double.
//!
//! Lookup failures never fail a classification request:
//! [`fun_fact_or_fallback`] maps every error to [`NO_FUN_FACT`].

use async_trait::async_trait;
use numclass_common::config::ServiceConfig;
use numclass_common::types::NO_FUN_FACT;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("numclass/", env!("CARGO_PKG_VERSION"));

/// Fun fact lookup errors
#[derive(Debug, Error)]
pub enum FactError {
    /// Network communication error (connect, DNS, body read)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// No response within the configured bound
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Trivia service answered with something other than 200
    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    /// Provider has no fact to offer
    #[error("No fact available: {0}")]
    Unavailable(String),
}

/// Source of trivia strings about integers
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Provider identifier for logs (e.g., "numbersapi")
    fn source_id(&self) -> &'static str;

    /// Fetch a fun fact about `n`
    async fn fun_fact(&self, n: i64) -> Result<String, FactError>;
}

/// Fetch a fun fact, substituting [`NO_FUN_FACT`] on any failure.
pub async fn fun_fact_or_fallback(provider: &dyn FactProvider, n: i64) -> String {
    match provider.fun_fact(n).await {
        Ok(fact) => fact,
        Err(e) => {
            warn!(
                number = n,
                source = provider.source_id(),
                error = %e,
                "Fun fact lookup failed, using fallback"
            );
            NO_FUN_FACT.to_string()
        }
    }
}

/// HTTP client for a Numbers API compatible trivia service
///
/// Issues one `GET {base_url}/{n}/math` per lookup, bounded by `timeout`.
/// No retries.
pub struct NumbersApiClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl NumbersApiClient {
    /// Create new client against `base_url` (no trailing slash needed)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FactError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FactError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Create client from resolved service configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self, FactError> {
        Self::new(config.fact_service_url.clone(), config.fact_timeout)
    }

    /// Lookup URL for `n`
    pub fn lookup_url(&self, n: i64) -> String {
        format!("{}/{}/math", self.base_url, n)
    }

    fn map_send_error(&self, e: reqwest::Error) -> FactError {
        if e.is_timeout() {
            FactError::Timeout(self.timeout)
        } else {
            FactError::NetworkError(e.to_string())
        }
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    fn source_id(&self) -> &'static str {
        "numbersapi"
    }

    async fn fun_fact(&self, n: i64) -> Result<String, FactError> {
        let url = self.lookup_url(n);
        debug!(number = n, url = %url, "Querying trivia service");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            return Err(FactError::ApiError(status.as_u16(), error_text));
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        Ok(body.trim().to_string())
    }
}

/// Deterministic provider for tests and offline runs
///
/// Returns a fixed fact (with `{n}` replaced by the number) or always fails.
#[derive(Debug, Clone)]
pub struct StaticFactProvider {
    template: Option<String>,
}

impl StaticFactProvider {
    /// Always answer with `template`
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
        }
    }

    /// Always fail with [`FactError::Unavailable`]
    pub fn unavailable() -> Self {
        Self { template: None }
    }
}

#[async_trait]
impl FactProvider for StaticFactProvider {
    fn source_id(&self) -> &'static str {
        "static"
    }

    async fn fun_fact(&self, n: i64) -> Result<String, FactError> {
        match &self.template {
            Some(template) => Ok(template.replace("{n}", &n.to_string())),
            None => Err(FactError::Unavailable(format!("no fact configured for {}", n))),
        }
    }
}
