//! SerpApi adapter
//!
//! General web search through SerpApi's Google engine.

use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::http::{default_client, execute_json, lenient};
use crate::domain::{
    DomainError, Listing, Provider, SearchResponse, DEFAULT_LINK, DEFAULT_REGION, DEFAULT_TITLE,
};
use crate::ports::{fingerprint, ListingSource};

pub const SERPAPI_BASE_URL: &str = "https://serpapi.com";
pub const DEFAULT_COUNTRY_CODE: &str = "in";

/// Envelope key holding the result list
const RESULTS_KEY: &str = "organic_results";

/// SerpApi-backed listing source
#[derive(Clone)]
pub struct SerpApiSource {
    client: Client,
    api_key: String,
    base_url: String,
    location: String,
    country_code: String,
}

impl SerpApiSource {
    /// Creates a source using the provided API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            api_key: api_key.into(),
            base_url: SERPAPI_BASE_URL.to_string(),
            location: DEFAULT_REGION.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Location and country code sent with every query
    pub fn with_locale(mut self, location: impl Into<String>, country_code: impl Into<String>) -> Self {
        self.location = location.into();
        self.country_code = country_code.into();
        self
    }

    pub(crate) fn build_request(&self, query: &str, count: usize) -> Result<Request, DomainError> {
        let url = format!("{}/search.json", self.base_url);
        let num = count.to_string();

        self.client
            .get(&url)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
                ("location", self.location.as_str()),
                ("gl", self.country_code.as_str()),
            ])
            .build()
            .map_err(|err| DomainError::ExternalService(format!("Invalid SerpApi request: {}", err)))
    }
}

#[async_trait]
impl ListingSource for SerpApiSource {
    fn provider(&self) -> Provider {
        Provider::SerpApi
    }

    fn credential_fingerprint(&self) -> String {
        fingerprint(&self.api_key)
    }

    async fn fetch(&self, query: &str, count: usize) -> Result<SearchResponse, DomainError> {
        let request = self.build_request(query, count)?;
        let payload = execute_json(&self.client, Provider::SerpApi, request).await?;
        Ok(parse_response(&payload))
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Default, Deserialize)]
struct OrganicResult {
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    snippet: Option<String>,
}

impl From<OrganicResult> for Listing {
    fn from(raw: OrganicResult) -> Self {
        Listing {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            link: raw.link.unwrap_or_else(|| DEFAULT_LINK.to_string()),
            snippet: raw.snippet,
            job: None,
        }
    }
}

/// Map a SerpApi payload into listings
///
/// A missing or non-list `organic_results` yields a response without a
/// results key. Items with unexpected shapes keep their position with
/// default fields.
pub fn parse_response(payload: &Value) -> SearchResponse {
    if let Some(message) = payload.get("error").and_then(|e| e.as_str()) {
        debug!(message = %message, "SerpApi reported no results");
    }

    let Some(items) = payload.get(RESULTS_KEY).and_then(|r| r.as_array()) else {
        return SearchResponse::empty();
    };

    let listings: Vec<Listing> = items
        .iter()
        .map(|item| {
            Listing::from(
                serde_json::from_value::<OrganicResult>(item.clone()).unwrap_or_default(),
            )
        })
        .collect();

    SearchResponse::with_listings(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_organic_results() {
        let payload = json!({
            "search_metadata": { "status": "Success" },
            "organic_results": [
                {
                    "position": 1,
                    "title": "Data Science Intern",
                    "link": "https://internshala.com/1",
                    "snippet": "Stipend ₹20,000 per month"
                },
                { "position": 2, "link": "https://naukri.com/2" }
            ]
        });

        let response = parse_response(&payload);
        let listings = response.listings();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Data Science Intern");
        assert_eq!(listings[0].snippet.as_deref(), Some("Stipend ₹20,000 per month"));
        assert_eq!(listings[1].title, DEFAULT_TITLE);
        assert_eq!(listings[1].link, "https://naukri.com/2");
        assert!(listings[1].snippet.is_none());
    }

    #[test]
    fn test_missing_results_key() {
        let payload = json!({ "error": "Google hasn't returned any results for this query." });
        assert!(!parse_response(&payload).has_results_key());
    }

    #[test]
    fn test_bad_field_keeps_other_fields() {
        let payload = json!({ "organic_results": [
            { "title": "Paid Intern", "link": "https://x/2", "snippet": ["₹ stipend"] },
            { "title": 42, "link": "https://x/3", "snippet": "Stipend offered" },
            "not an object"
        ]});

        let response = parse_response(&payload);
        let listings = response.listings();
        assert_eq!(listings.len(), 3);

        assert_eq!(listings[0].title, "Paid Intern");
        assert_eq!(listings[0].link, "https://x/2");
        assert!(listings[0].snippet.is_none());

        assert_eq!(listings[1].title, DEFAULT_TITLE);
        assert_eq!(listings[1].link, "https://x/3");
        assert_eq!(listings[1].snippet.as_deref(), Some("Stipend offered"));

        assert_eq!(listings[2].title, DEFAULT_TITLE);
        assert_eq!(listings[2].link, DEFAULT_LINK);
    }

    #[test]
    fn test_request_encodes_query() {
        let source = SerpApiSource::new("secret");
        let query = "Data Science internship in India for Python, SQL site:indeed.com OR site:hirect.in";
        let request = source.build_request(query, 10).unwrap();
        let url = request.url();

        assert_eq!(url.path(), "/search.json");
        assert!(!url.as_str().contains(' '));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("q".to_string(), query.to_string())));
        assert!(pairs.contains(&("engine".to_string(), "google".to_string())));
        assert!(pairs.contains(&("num".to_string(), "10".to_string())));
        assert!(pairs.contains(&("location".to_string(), "India".to_string())));
        assert!(pairs.contains(&("gl".to_string(), "in".to_string())));
        assert!(pairs.contains(&("api_key".to_string(), "secret".to_string())));
    }

    #[test]
    fn test_fingerprint_depends_on_key() {
        let a = SerpApiSource::new("key-a");
        let b = SerpApiSource::new("key-b");
        assert_ne!(a.credential_fingerprint(), b.credential_fingerprint());
    }
}
