//! Error types for GridLens

use thiserror::Error;

/// Main error type for GridLens operations
#[derive(Error, Debug)]
pub enum GridLensError {
    /// Configuration file is present but unusable
    #[error("Config error: {0}")]
    Config(String),

    /// Translation bundle could not be loaded
    #[error("Translation error: {0}")]
    Translation(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Outbound HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for GridLens operations
pub type Result<T> = std::result::Result<T, GridLensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GridLensError::Config("bad threshold".to_string());
        assert_eq!(err.to_string(), "Config error: bad threshold");

        let err = GridLensError::Translation("missing bundle".to_string());
        assert_eq!(err.to_string(), "Translation error: missing bundle");
    }

    #[test]
    fn json_error_converts() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: GridLensError = parsed.unwrap_err().into();
        assert!(matches!(err, GridLensError::Json(_)));
    }
}
