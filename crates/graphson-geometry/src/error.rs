//! WKT parse error type.

use thiserror::Error;

/// Errors produced while parsing Well-Known Text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WktError {
    #[error("unexpected end of WKT input")]
    UnexpectedEnd,
    #[error("unexpected `{found}` at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        offset: usize,
        expected: &'static str,
    },
    #[error("expected {expected} geometry, found `{found}`")]
    WrongGeometry {
        expected: &'static str,
        found: String,
    },
    #[error("invalid coordinate `{0}`")]
    InvalidNumber(String),
    #[error("expected 2 coordinates per position, found {0}")]
    Dimension(usize),
}
