//! Uniform response envelope shared by every inventory endpoint.
//!
//! ```json
//! { "metadata": { "message": "...", "code": "00", "description": "..." },
//!   "data": { "products": [ ... ] } }
//! ```
//!
//! The HTTP status travels out of band. Envelopes are built once from the
//! final outcome of a request.

use poem::http::StatusCode;
use poem_openapi::Object;

pub const CODE_OK: &str = "00";
pub const CODE_NOK: &str = "-1";
pub const MESSAGE_OK: &str = "Response ok";
pub const MESSAGE_NOK: &str = "Response nok";

#[derive(Object, Debug, Clone, PartialEq)]
pub struct Metadata {
    /// "Response ok" or "Response nok"
    pub message: String,
    /// "00" on success, "-1" on failure
    pub code: String,
    /// Human-readable outcome
    pub description: String,
}

impl Metadata {
    pub fn ok(description: impl Into<String>) -> Self {
        Self {
            message: MESSAGE_OK.to_string(),
            code: CODE_OK.to_string(),
            description: description.into(),
        }
    }

    pub fn nok(description: impl Into<String>) -> Self {
        Self {
            message: MESSAGE_NOK.to_string(),
            code: CODE_NOK.to_string(),
            description: description.into(),
        }
    }
}

/// A failed outcome ready to be wrapped: the status to send and the
/// description to put in the metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub status: StatusCode,
    pub description: String,
}

impl Failure {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, description)
    }
}

/// Maps a use case error onto the failure sent back to the caller.
///
/// `not_found` describes the missing entity for this operation and
/// `on_error` describes a store or codec failure.
pub trait IntoFailure {
    fn into_failure(self, not_found: &str, on_error: &str) -> Failure;
}

/// Parses an identifier taken from the request path.
pub fn parse_id(raw: &str) -> Result<i64, Failure> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Failure::bad_request(format!("Invalid identifier: {}", raw)))
}
