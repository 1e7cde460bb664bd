//! Error type shared by the GraphSON reader and writer.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while encoding or decoding GraphSON.
#[derive(Debug, Error)]
pub enum GraphSONError {
    /// No handler is registered for a value kind (encode) or a wire tag (decode).
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
    /// A structural payload lacks a field its handler requires.
    #[error("missing field `{field}` in {record} record")]
    MissingField {
        field: &'static str,
        record: &'static str,
    },
    /// A payload could not be converted into its native representation.
    #[error("cannot parse {tag} payload {payload}: {reason}")]
    Parse {
        tag: String,
        payload: String,
        reason: String,
    },
    /// Nesting went deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },
    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphSONError {
    pub(crate) fn parse(tag: &str, payload: &Value, reason: impl ToString) -> Self {
        GraphSONError::Parse {
            tag: tag.to_string(),
            payload: payload.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn missing(field: &'static str, record: &'static str) -> Self {
        GraphSONError::MissingField { field, record }
    }
}

pub type Result<T> = std::result::Result<T, GraphSONError>;
