use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "https://api.opencollective.com";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Admin-side settings for one collective. The API token must carry admin
/// rights on the collective; everything else has a workable default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub api_token: String,
    pub collective_id: i64,
    pub collective_slug: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Cards per list page; absent or zero falls back to the built-in page
    /// size.
    #[serde(default)]
    pub page_limit: Option<u32>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Settings {
    pub fn template(collective_slug: &str) -> Self {
        Self {
            api_base: default_api_base(),
            api_token: String::new(),
            collective_id: 0,
            collective_slug: collective_slug.to_string(),
            currency: default_currency(),
            page_limit: None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Settings("api_base must be non-empty".into()));
        }
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::Settings("api_token must be non-empty".into()));
        }
        if self.collective_id <= 0 {
            return Err(ConfigError::Settings(
                "collective_id must be a positive id".into(),
            ));
        }
        if self.collective_slug.trim().is_empty() {
            return Err(ConfigError::Settings(
                "collective_slug must be non-empty".into(),
            ));
        }
        if self.currency.trim().len() != 3 {
            return Err(ConfigError::Settings(
                "currency must be a three-letter code".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(yaml: &str) -> Settings {
        serde_yaml::from_str(yaml).expect("parse settings")
    }

    #[test]
    fn defaults_fill_api_base_and_currency() {
        let settings = parsed(
            r#"
api_token: secret
collective_id: 42
collective_slug: webpack
"#,
        );
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.currency, DEFAULT_CURRENCY);
        assert_eq!(settings.page_limit, None);
        settings.validate().expect("valid settings");
    }

    #[test]
    fn validate_rejects_blank_token_and_bad_currency() {
        let mut settings = parsed(
            r#"
api_token: secret
collective_id: 42
collective_slug: webpack
currency: EURO
"#,
        );
        assert!(settings.validate().is_err());
        settings.currency = "EUR".to_string();
        settings.api_token = " ".to_string();
        assert!(settings.validate().is_err());
    }
}
