//! Defines the custom error types for the application.
//!
//! This uses `thiserror` for clean, boilerplate-free error handling.
//! Every variant maps onto one of the two categories the adapter reports
//! in its error document.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),

    #[error("JSON Parsing Error: {0}")]
    JsonParse(String),

    #[error("Invalid Record Shape: {0}")]
    InvalidShape(String),

    #[error("Schema Loading Error: {0}")]
    Schema(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

/// Failure category carried by the `type` attribute of the error document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was not JSON, or not a record-shaped JSON object.
    JsonParsing,
    /// Anything else.
    General,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::JsonParsing => "JsonParsing",
            ErrorCategory::General => "General",
        }
    }
}

impl ConverterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConverterError::JsonParse(_) | ConverterError::InvalidShape(_) => {
                ErrorCategory::JsonParsing
            }
            ConverterError::Io(..) | ConverterError::Schema(_) | ConverterError::Serialization(_) => {
                ErrorCategory::General
            }
        }
    }

    /// True for malformed JSON and for JSON of the wrong shape.
    pub fn is_parse_error(&self) -> bool {
        self.category() == ErrorCategory::JsonParsing
    }
}
