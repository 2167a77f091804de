//! Listing - One result returned by a search provider
//!
//! Provider adapters apply field defaults once while parsing, so every
//! `Listing` is complete by construction.

use serde::{Deserialize, Serialize};

/// Default title when the provider omits one (web search)
pub const DEFAULT_TITLE: &str = "No Title";
/// Default link when the provider omits one
pub const DEFAULT_LINK: &str = "#";
/// Placeholder for any missing job field
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for a missing salary
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";
/// Shown in place of a missing snippet
pub const NO_DESCRIPTION: &str = "No description available.";

/// A single search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    /// Title shown as the link text
    pub title: String,
    /// Target URL (`#` when unknown)
    pub link: String,
    /// Free-text excerpt used for display and pay classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Structured job fields (job-search providers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobDetails>,
}

impl Listing {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: None,
            job: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_job(mut self, job: JobDetails) -> Self {
        self.job = Some(job);
        self
    }

    /// Snippet text, or the "no description" placeholder
    pub fn snippet_or_default(&self) -> &str {
        self.snippet.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

/// Structured fields of a job posting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobDetails {
    pub employer: String,
    pub location: String,
    pub employment_type: String,
    pub remote: bool,
    /// Posting date as `YYYY-MM-DD`, or `N/A`
    pub posted_on: String,
    pub salary: String,
}

impl Default for JobDetails {
    fn default() -> Self {
        Self {
            employer: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            employment_type: NOT_AVAILABLE.to_string(),
            remote: false,
            posted_on: NOT_AVAILABLE.to_string(),
            salary: SALARY_NOT_SPECIFIED.to_string(),
        }
    }
}

/// Parsed provider response
///
/// `listings` is `None` when the provider envelope lacked its results key.
/// That covers both "nothing matched" and "upstream error"; callers treat
/// the two the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub listings: Option<Vec<Listing>>,
}

impl SearchResponse {
    /// Response with no results key at all
    pub fn empty() -> Self {
        Self { listings: None }
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Some(listings),
        }
    }

    /// Whether the provider returned its results key
    pub fn has_results_key(&self) -> bool {
        self.listings.is_some()
    }

    /// Listings, or an empty slice when the key was missing
    pub fn listings(&self) -> &[Listing] {
        self.listings.as_deref().unwrap_or(&[])
    }

    pub fn into_listings(self) -> Vec<Listing> {
        self.listings.unwrap_or_default()
    }
}
