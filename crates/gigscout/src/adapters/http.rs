//! Shared HTTP plumbing for provider adapters

use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;

use crate::domain::{DomainError, Provider};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client with the timeout and user agent every adapter uses
pub fn default_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("gigscout/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Send a prepared request and decode a JSON body
pub(crate) async fn execute_json(
    client: &Client,
    provider: Provider,
    request: Request,
) -> Result<Value, DomainError> {
    let response = client.execute(request).await.map_err(|err| {
        DomainError::ExternalService(format!(
            "{} request failed: {}",
            provider.display_name(),
            err
        ))
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(map_http_error(provider, status, body));
    }

    response.json::<Value>().await.map_err(|err| {
        DomainError::Parse(format!(
            "{} returned malformed JSON: {}",
            provider.display_name(),
            err
        ))
    })
}

/// Turn a non-success status into a domain error with the provider's message
pub(crate) fn map_http_error(provider: Provider, status: StatusCode, body: String) -> DomainError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return DomainError::rate_limited(provider.display_name());
    }

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message").or(Some(err)))
                .or_else(|| json.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::api_error(provider.display_name(), status.as_u16(), &message)
}

/// Field deserializer that maps a wrongly typed value to `None`
///
/// Use with `#[serde(default, deserialize_with = "lenient")]` so one bad
/// field does not discard the rest of the record.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
