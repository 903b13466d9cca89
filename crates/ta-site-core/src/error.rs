//! Error types for the site

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for site operations.
///
/// The page itself has no failure modes; these cover the edges around it
/// (reading configuration, installing the log subscriber, writing exports).
#[derive(Error, Debug)]
pub enum SiteError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfig("firm_name is empty".to_string());
        assert_eq!(format!("{}", err), "Invalid config: firm_name is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_config_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SiteError::Config {
            path: PathBuf::from("site.json"),
            source,
        };
        assert!(err.to_string().starts_with("Config parse error in site.json"));
    }
}
