// src/error.rs
//! Error types for the CV viewer library.

use std::io;
use thiserror::Error;

/// Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be retrieved or decoded. Covers transport
    /// errors, non-2xx statuses and malformed bodies alike; no partial
    /// document is ever surfaced.
    #[error("Failed to load CV document: {reason}")]
    LoadFailure { reason: String },

    /// The document carries no section labels for the active language.
    #[error("Translations not found for {lang}")]
    TranslationMissing { lang: String },

    /// Export was requested outside the Ready state. Fails closed, before
    /// any chrome visibility mutation.
    #[error("Export rejected: {0}")]
    ExportPrecondition(&'static str),

    /// The rasterization engine failed to produce the artifact.
    #[error("PDF export failed: {0}")]
    ExportFailed(String),

    /// Source data did not pass schema validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TranslationMissing {
            lang: "de".to_string(),
        };
        assert_eq!(err.to_string(), "Translations not found for de");

        let err = Error::ExportPrecondition("document not loaded");
        assert_eq!(err.to_string(), "Export rejected: document not loaded");
    }
}
