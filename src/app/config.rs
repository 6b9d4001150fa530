//! Start-up configuration
//!
//! Settings come from a TOML file (`$OFFERDECK_CONFIG`, or `offerdeck.toml` in the
//! platform config directory). The API key is never stored in the file; it is
//! read from the environment variable named by `generator.api_key_env`.

#![warn(clippy::all, rust_2018_idioms)]

use crate::app::dashui::ThemeChoice;
use crate::{log_info, log_warn};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const CONFIG_PATH_ENV: &str = "OFFERDECK_CONFIG";
pub const CONFIG_FILE_NAME: &str = "offerdeck.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 30,
            api_key_env: "OFFERDECK_API_KEY".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("generator.endpoint '{}' is not a valid URL", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "generator.endpoint must use http or https, got '{}'",
                url.scheme()
            );
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the configured environment variable, if set and not blank
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeckConfig {
    pub theme: ThemeChoice,
    pub generator: GeneratorConfig,
}

impl DeckConfig {
    /// `$OFFERDECK_CONFIG`, falling back to the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        directories::ProjectDirs::from("com", "", "offerdeck")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DeckConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(config)
    }

    /// Load from the default location. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log_info!("Loading configuration from {}", path.display());
                Self::load_from_file(&path)
            }
            Some(path) => {
                log_info!(
                    "No configuration at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                log_warn!("Could not determine a config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.generator.endpoint_url()?;
        if self.generator.model.trim().is_empty() {
            bail!("generator.model must not be empty");
        }
        if self.generator.timeout_secs == 0 {
            bail!("generator.timeout_secs must be greater than zero");
        }
        if self.generator.api_key_env.trim().is_empty() {
            bail!("generator.api_key_env must name an environment variable");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        DeckConfig::default().validate().unwrap();
        assert_eq!(DeckConfig::default().generator.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DeckConfig = toml::from_str(
            r#"
            theme = "latte"

            [generator]
            model = "gemini-1.5-pro"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeChoice::Latte);
        assert_eq!(config.generator.model, "gemini-1.5-pro");
        assert_eq!(config.generator.timeout_secs, 30);
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = DeckConfig {
            generator: GeneratorConfig {
                endpoint: "ftp://example.test".into(),
                ..GeneratorConfig::default()
            },
            ..DeckConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = DeckConfig {
            generator: GeneratorConfig {
                timeout_secs: 0,
                ..GeneratorConfig::default()
            },
            ..DeckConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
