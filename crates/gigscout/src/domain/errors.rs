//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn api_error(provider: impl std::fmt::Display, status: u16, message: &str) -> Self {
        Self::ExternalService(format!("{} API error ({}): {}", provider, status, message))
    }

    pub fn rate_limited(provider: impl std::fmt::Display) -> Self {
        Self::ExternalService(format!("{} rate limited the request", provider))
    }
}
