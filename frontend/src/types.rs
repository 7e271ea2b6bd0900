//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **State Types** - The single upload state owned by the app shell
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

// =============================================================================
// State Types
// =============================================================================

/// Where the upload flow currently stands.
///
/// Exactly one variant holds at a time. Only the orchestrator writes it;
/// components receive it read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Uploading,
    /// The last attempt failed with this user-facing message
    Error(String),
    /// The backend accepted the workbook
    Success(ResultsPayload),
}

impl UploadState {
    /// Terminal state for a finished upload attempt.
    pub fn from_outcome(outcome: AppResult<ResultsPayload>) -> Self {
        match outcome {
            Ok(results) => UploadState::Success(results),
            Err(err) => UploadState::Error(err.user_message()),
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsPayload> {
        match self {
            UploadState::Success(results) => Some(results),
            _ => None,
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Successful response from the backend upload endpoint.
///
/// Untrusted input: only the two URLs are required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    /// Path of the processed workbook, relative to the API base
    pub excel_url: String,
    /// Path of the summary report, relative to the API base
    pub word_url: String,
    /// Human-readable summary; may embed legacy address samples
    #[serde(default, deserialize_with = "nullable_text")]
    pub message: String,
    /// Geocoded address samples, sent when mock geolocation was used
    #[serde(default)]
    pub coordinates: Option<Vec<CoordinateEntry>>,
}

/// One geocoded address sample.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateEntry {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lon: Option<f64>,
    /// City the mock coordinates were derived from
    #[serde(default)]
    pub city: Option<String>,
}

/// Error document returned alongside non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}

/// Null reads as an empty string.
fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON number, a numeric string or null.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()))
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant is shown to the user the same way, as a single message
/// replacing any previous results. `Display` adds a category prefix for logs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Client-side validation failed before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request could not be built or never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend reported a failure.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx body that is not a results payload.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl AppError {
    /// Message displayed in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Network(msg) | AppError::Decode(msg) => {
                msg.clone()
            }
            AppError::Server { message, .. } => message.clone(),
        }
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(format!("Failed to parse response: {}", err))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Network(format!("Failed to build request: {:?}", value))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
