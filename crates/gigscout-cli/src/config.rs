//! Configuration management for gigscout CLI
//!
//! Stores provider API keys and search defaults in ~/.config/gigscout/config.toml.
//! Keys can be overridden by environment variables (a `.env` file is honoured).

use anyhow::{Context, Result};
use gigscout::domain::DEFAULT_REGION;
use gigscout::{Provider, DEFAULT_RESULT_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_DIR: &str = "gigscout";
const CONFIG_FILE: &str = "config.toml";

/// Per-provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// RapidAPI host header (JSearch only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<Provider>,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[serde(default = "default_result_count")]
    pub result_count: usize,
    #[serde(default)]
    pub serpapi: ProviderConfig,
    #[serde(default)]
    pub jsearch: ProviderConfig,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_country_code() -> String {
    gigscout::adapters::serpapi::DEFAULT_COUNTRY_CODE.to_string()
}

fn default_result_count() -> usize {
    DEFAULT_RESULT_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: None,
            region: default_region(),
            country_code: default_country_code(),
            result_count: default_result_count(),
            serpapi: ProviderConfig::default(),
            jsearch: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::SerpApi => &self.serpapi,
            Provider::JSearch => &self.jsearch,
        }
    }

    fn provider_mut(&mut self, provider: Provider) -> &mut ProviderConfig {
        match provider {
            Provider::SerpApi => &mut self.serpapi,
            Provider::JSearch => &mut self.jsearch,
        }
    }

    /// Set API key for a provider
    pub fn set_api_key(&mut self, provider: Provider, key: String) {
        self.provider_mut(provider).api_key = Some(key);
    }

    /// Credential for a provider: environment first, then the config file
    pub fn credential(&self, provider: Provider) -> Option<String> {
        resolve_credential(
            std::env::var(provider.credential_env_var()).ok(),
            self.provider(provider).api_key.as_deref(),
        )
    }

    /// Cache window for a provider
    pub fn cache_ttl(&self, provider: Provider) -> Duration {
        self.provider(provider)
            .cache_ttl_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| provider.default_cache_ttl())
    }

    /// Provider to use when none is given on the command line
    pub fn resolve_provider(&self, requested: Option<Provider>) -> Provider {
        requested
            .or(self.default_provider)
            .unwrap_or(Provider::SerpApi)
    }
}

fn resolve_credential(env_value: Option<String>, file_value: Option<&str>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| file_value.map(str::to_string))
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
            default_provider = "jsearch"
            region = "Germany"
            country_code = "de"
            result_count = 5

            [serpapi]
            api_key = "serp-key"

            [jsearch]
            api_key = "rapid-key"
            host = "jsearch.example.com"
            cache_ttl_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.default_provider, Some(Provider::JSearch));
        assert_eq!(config.region, "Germany");
        assert_eq!(config.result_count, 5);
        assert_eq!(config.serpapi.api_key.as_deref(), Some("serp-key"));
        assert_eq!(config.jsearch.host.as_deref(), Some("jsearch.example.com"));
        assert_eq!(config.cache_ttl(Provider::JSearch), Duration::from_secs(60));
        assert_eq!(
            config.cache_ttl(Provider::SerpApi),
            Provider::SerpApi.default_cache_ttl()
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.region, "India");
        assert_eq!(config.country_code, "in");
        assert_eq!(config.result_count, 10);
        assert_eq!(config.resolve_provider(None), Provider::SerpApi);
        assert_eq!(
            config.resolve_provider(Some(Provider::JSearch)),
            Provider::JSearch
        );
    }

    #[test]
    fn test_env_credential_wins() {
        assert_eq!(
            resolve_credential(Some("env".to_string()), Some("file")),
            Some("env".to_string())
        );
        assert_eq!(
            resolve_credential(Some("  ".to_string()), Some("file")),
            Some("file".to_string())
        );
        assert_eq!(resolve_credential(None, Some("")), None);
        assert_eq!(resolve_credential(None, None), None);
    }

    #[test]
    fn test_round_trip_keeps_keys() {
        let mut config = Config::default();
        config.set_api_key(Provider::JSearch, "rapid".to_string());

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed.jsearch.api_key.as_deref(), Some("rapid"));
        assert!(parsed.serpapi.api_key.is_none());
    }
}
