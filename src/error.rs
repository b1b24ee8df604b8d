//! Custom error types for admetrics
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for admetrics operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed section input (e.g., a table with no columns)
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    /// Composition attempted on a document with no pages
    #[error("Document has not been initialized with a page")]
    UninitializedDocument,

    /// Underlying CSV/PDF primitive failure
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Data source errors (missing or malformed input data)
    #[error("Data source error: {0}")]
    DataSource(String),

    /// A second export was requested while one is in flight
    #[error("An export is already in progress")]
    ExportInProgress,
}

impl ReportError {
    /// Create an invalid-section error
    pub fn invalid_section(msg: impl Into<String>) -> Self {
        Self::InvalidSection(msg.into())
    }

    /// Check if this is an invalid-section error
    pub fn is_invalid_section(&self) -> bool {
        matches!(self, Self::InvalidSection(_))
    }

    /// Check if this is the in-flight rejection
    pub fn is_export_in_progress(&self) -> bool {
        matches!(self, Self::ExportInProgress)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataSource(err.to_string())
    }
}

/// Result type alias for admetrics operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_section() {
        let err = ReportError::invalid_section("no columns");
        assert_eq!(err.to_string(), "Invalid section: no columns");
        assert!(err.is_invalid_section());
    }

    #[test]
    fn test_uninitialized_document_display() {
        let err = ReportError::UninitializedDocument;
        assert_eq!(
            err.to_string(),
            "Document has not been initialized with a page"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
