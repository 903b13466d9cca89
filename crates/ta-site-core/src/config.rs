//! Site configuration.
//!
//! Firm identity and contact details shown on the page. Every key is
//! optional in the JSON file; missing keys keep the built-in copy.
//!
//! ```json
//! {
//!   "firm_name": "Tawfik & Amro",
//!   "email": "hello@ta-nonprofit.com",
//!   "copyright_year": 2026
//! }
//! ```

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Firm name used in the header, footer and document title.
    pub firm_name: String,
    /// Short monogram drawn in the logo square.
    pub firm_mark: String,
    /// Line under the firm name.
    pub firm_subtitle: String,
    pub email: String,
    pub phone: String,
    /// Fixed footer year. `None` uses the current local year.
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            firm_name: "Tawfik & Amro".to_string(),
            firm_mark: "TA".to_string(),
            firm_subtitle: "Nonprofit Accounting".to_string(),
            email: "hello@ta-nonprofit.com".to_string(),
            phone: "(555) 555-0199".to_string(),
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Load `path` if given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SiteResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.firm_name.trim().is_empty() {
            return Err(SiteError::InvalidConfig("firm_name is empty".to_string()));
        }
        if self.firm_mark.trim().is_empty() {
            return Err(SiteError::InvalidConfig("firm_mark is empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(SiteError::InvalidConfig(format!(
                "email '{}' is not an address",
                self.email
            )));
        }
        Ok(())
    }

    /// Year printed in the footer.
    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Full legal-ish name used in the footer and document title.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firm_name, self.firm_subtitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_page_copy() {
        let config = SiteConfig::default();
        assert_eq!(config.firm_name, "Tawfik & Amro");
        assert_eq!(config.full_name(), "Tawfik & Amro Nonprofit Accounting");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{ "phone": "(555) 555-0100", "copyright_year": 2026 }"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.phone, "(555) 555-0100");
        assert_eq!(config.firm_mark, "TA");
        assert_eq!(config.year(), 2026);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, SiteError::Config { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SiteError::Io(_)));
    }

    #[test]
    fn rejects_bad_email() {
        let config = SiteConfig {
            email: "nobody".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn year_defaults_to_now() {
        let config = SiteConfig::default();
        assert_eq!(config.year(), chrono::Local::now().year());
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(SiteConfig::load_or_default(None).unwrap(), SiteConfig::default());
    }
}
