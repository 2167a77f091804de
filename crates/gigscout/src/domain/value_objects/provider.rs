//! Provider - Upstream search API types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream search provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// General web search (Google engine) through SerpApi
    SerpApi,
    /// Job listings through the JSearch API on RapidAPI
    JSearch,
}

impl Provider {
    /// How long a memoized response stays fresh unless configured otherwise
    pub fn default_cache_ttl(&self) -> Duration {
        match self {
            Provider::SerpApi => Duration::from_secs(6 * 3600),
            Provider::JSearch => Duration::from_secs(3600),
        }
    }

    /// Environment variable that overrides the configured credential
    pub fn credential_env_var(&self) -> &'static str {
        match self {
            Provider::SerpApi => "GIGSCOUT_SERPAPI_KEY",
            Provider::JSearch => "GIGSCOUT_RAPIDAPI_KEY",
        }
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::SerpApi => "SerpApi",
            Provider::JSearch => "JSearch",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::SerpApi => write!(f, "serpapi"),
            Provider::JSearch => write!(f, "jsearch"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serpapi" | "web" | "google" => Ok(Provider::SerpApi),
            "jsearch" | "jobs" | "rapidapi" => Ok(Provider::JSearch),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}
