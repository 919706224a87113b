use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("field '{field}': invalid integer '{value}': {source}")]
    InvalidInteger {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("field '{field}': entry '{entry}' is not a 'key:value' pair")]
    MalformedMapEntry { field: String, entry: String },

    #[error("invalid timezone: {0}")]
    InvalidTimeZone(String),

    #[error("invalid date '{value}' (expected YYYY-MM-DDTHH:MM): {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid timestamp format: {0}")]
    InvalidFormat(String),

    #[error("field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
