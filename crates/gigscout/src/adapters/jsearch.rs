//! JSearch adapter
//!
//! Job listings from the JSearch API hosted on RapidAPI.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, Request};
use serde::Deserialize;
use serde_json::Value;

use super::http::{default_client, execute_json, lenient};
use crate::domain::{
    DomainError, JobDetails, Listing, Provider, SearchResponse, DEFAULT_LINK, NOT_AVAILABLE,
    SALARY_NOT_SPECIFIED,
};
use crate::ports::{fingerprint, ListingSource};

pub const JSEARCH_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
pub const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";

/// Envelope key holding the result list
const RESULTS_KEY: &str = "data";
/// Longest description kept as a listing snippet
const SNIPPET_CHARS: usize = 280;

/// JSearch-backed listing source
#[derive(Clone)]
pub struct JSearchSource {
    client: Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl JSearchSource {
    /// Creates a source using the provided RapidAPI key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            api_key: api_key.into(),
            host: JSEARCH_HOST.to_string(),
            base_url: JSEARCH_BASE_URL.to_string(),
        }
    }

    /// Overrides the `X-RapidAPI-Host` header value
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn build_request(&self, query: &str) -> Result<Request, DomainError> {
        let url = format!("{}/search", self.base_url);

        self.client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .query(&[("query", query), ("page", "1"), ("num_pages", "1")])
            .build()
            .map_err(|err| DomainError::ExternalService(format!("Invalid JSearch request: {}", err)))
    }
}

#[async_trait]
impl ListingSource for JSearchSource {
    fn provider(&self) -> Provider {
        Provider::JSearch
    }

    fn credential_fingerprint(&self) -> String {
        fingerprint(&self.api_key)
    }

    async fn fetch(&self, query: &str, count: usize) -> Result<SearchResponse, DomainError> {
        let request = self.build_request(query)?;
        let payload = execute_json(&self.client, Provider::JSearch, request).await?;
        Ok(parse_response(&payload, count))
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Default, Deserialize)]
struct JobRecord {
    #[serde(default, deserialize_with = "lenient")]
    job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    employer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_apply_link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_google_link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_employment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_is_remote: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    job_posted_at_datetime_utc: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_salary: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    job_min_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    job_max_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    job_salary_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    job_salary_period: Option<String>,
}

impl From<JobRecord> for Listing {
    fn from(raw: JobRecord) -> Self {
        let salary = salary_text(&raw);
        let posted_on = posted_date(raw.job_posted_at_datetime_utc.as_deref());

        let job = JobDetails {
            employer: raw.employer_name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            location: raw.job_city.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            employment_type: raw
                .job_employment_type
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            remote: raw.job_is_remote.unwrap_or(false),
            posted_on,
            salary,
        };

        Listing {
            title: raw.job_title.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            link: raw
                .job_apply_link
                .or(raw.job_google_link)
                .unwrap_or_else(|| DEFAULT_LINK.to_string()),
            snippet: raw.job_description.map(|d| truncate_chars(&d, SNIPPET_CHARS)),
            job: Some(job),
        }
    }
}

/// Map a JSearch payload into at most `count` listings
pub fn parse_response(payload: &Value, count: usize) -> SearchResponse {
    let Some(items) = payload.get(RESULTS_KEY).and_then(|d| d.as_array()) else {
        return SearchResponse::empty();
    };

    let listings: Vec<Listing> = items
        .iter()
        .take(count)
        .map(|item| {
            Listing::from(serde_json::from_value::<JobRecord>(item.clone()).unwrap_or_default())
        })
        .collect();

    SearchResponse::with_listings(listings)
}

/// `YYYY-MM-DD` from the posting timestamp
fn posted_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => raw.chars().take(10).collect(),
    }
}

/// Salary from `job_salary`, else the min/max range, else a placeholder
fn salary_text(raw: &JobRecord) -> String {
    let explicit = match &raw.job_salary {
        Some(Value::Object(obj)) => obj.get("salary").and_then(value_text),
        Some(other) => value_text(other),
        None => None,
    };
    if let Some(text) = explicit {
        return text;
    }

    let range = match (raw.job_min_salary, raw.job_max_salary) {
        (Some(min), Some(max)) => format!("{} - {}", min, max),
        (Some(amount), None) | (None, Some(amount)) => amount.to_string(),
        (None, None) => return SALARY_NOT_SPECIFIED.to_string(),
    };

    let mut text = range;
    if let Some(currency) = &raw.job_salary_currency {
        text.push(' ');
        text.push_str(currency);
    }
    if let Some(period) = &raw.job_salary_period {
        text.push('/');
        text.push_str(period);
    }
    text
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Truncate by char count, not bytes
fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head.trim_end())
    } else {
        s.to_string()
    }
}
