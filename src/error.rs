//! Error types for manualtex library.

use std::io;
use thiserror::Error;

/// Result type alias for manualtex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a manual.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed JSON.
    #[error("JSON syntax error: {0}")]
    Json(String),

    /// The input record failed validation.
    #[error("Invalid document: {0}")]
    Validation(#[from] ValidationError),

    /// Error during rendering (LaTeX, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => Error::Io(err.into()),
            serde_json::error::Category::Data => {
                Error::Validation(ValidationError::Malformed(err.to_string()))
            }
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                Error::Json(err.to_string())
            }
        }
    }
}

/// Reasons a document record is rejected before rendering.
///
/// Entry indices are 1-based, matching the step labels in the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is missing or blank.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A step or part entry lacks a required field.
    #[error("{entry} {index} is missing required field `{field}`")]
    MissingField {
        entry: &'static str,
        index: usize,
        field: &'static str,
    },

    /// A part quantity is below zero.
    #[error("part {index} has negative quantity {value}")]
    NegativeQuantity { index: usize, value: i64 },

    /// A part quantity is not an integer.
    #[error("part {index} has non-numeric quantity `{value}`")]
    NonNumericQuantity { index: usize, value: String },

    /// The record does not have the expected shape.
    #[error("malformed record: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation(ValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "Invalid document: title must not be empty");

        let err = ValidationError::MissingField {
            entry: "step",
            index: 2,
            field: "caption",
        };
        assert_eq!(err.to_string(), "step 2 is missing required field `caption`");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        assert!(matches!(Error::from(syntax), Error::Json(_)));

        let data = serde_json::from_str::<Vec<u32>>("{\"a\": 1}").unwrap_err();
        assert!(matches!(
            Error::from(data),
            Error::Validation(ValidationError::Malformed(_))
        ));
    }
}
