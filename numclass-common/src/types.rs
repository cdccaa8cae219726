//! Shared API response types
//!
//! JSON bodies returned by `GET /api/classify-number`.

use serde::{Deserialize, Serialize};

use crate::classify::{Classification, NumberProperty};

/// Message returned with every rejected classification request
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please provide a valid integer.";

/// Fun fact substituted whenever the trivia service cannot supply one
pub const NO_FUN_FACT: &str = "No fun fact available.";

/// Successful classification body (200)
///
/// # Examples
///
/// ```
/// use numclass_common::classify;
/// use numclass_common::types::ClassificationResult;
///
/// let result = ClassificationResult::new(classify(153), "153 is narcissistic.".to_string());
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["properties"], serde_json::json!(["armstrong", "odd"]));
/// assert_eq!(json["digit_sum"], 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

impl ClassificationResult {
    /// Attach a fun fact to a local classification
    pub fn new(classification: Classification, fun_fact: String) -> Self {
        Self {
            number: classification.number,
            is_prime: classification.is_prime,
            is_perfect: classification.is_perfect,
            properties: classification.properties,
            digit_sum: classification.digit_sum,
            fun_fact,
        }
    }
}

/// Rejected input body (400)
///
/// `number` echoes the raw query value exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub number: String,
    pub error: bool,
    pub message: String,
}

impl ErrorResult {
    /// Error body for a raw value that is not an integer
    pub fn invalid_input(raw: impl Into<String>) -> Self {
        Self {
            number: raw.into(),
            error: true,
            message: INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}
