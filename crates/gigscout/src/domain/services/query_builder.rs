//! Query Builder
//!
//! Turns validated criteria into provider query strings using fixed
//! templates. Input is embedded verbatim; encoding happens in the HTTP layer.

use crate::domain::entities::SearchCriteria;

/// Job boards the web-search queries are restricted to
pub const JOB_SITES: [&str; 10] = [
    "internshala.com",
    "linkedin.com",
    "indeed.com",
    "naukri.com",
    "monsterindia.com",
    "letsintern.com",
    "glassdoor.co.in",
    "freshersworld.com",
    "hirect.in",
    "internships.com",
];

pub const DEFAULT_REGION: &str = "India";

/// Builds query strings for a fixed region and site list
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    region: String,
    site_filter: String,
}

impl QueryBuilder {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            site_filter: site_filter(&JOB_SITES),
        }
    }

    /// Replace the site list (an empty list drops the filter)
    pub fn with_sites(mut self, sites: &[&str]) -> Self {
        self.site_filter = site_filter(sites);
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Web-search query for internships
    pub fn internship_query(&self, criteria: &SearchCriteria) -> String {
        self.restricted(format!(
            "{} internship in {} for {}",
            criteria.interest(),
            self.region,
            criteria.skills()
        ))
    }

    /// Web-search query for full-time jobs
    pub fn job_query(&self, criteria: &SearchCriteria) -> String {
        self.restricted(format!(
            "{} jobs in {} for {}",
            criteria.interest(),
            self.region,
            criteria.skills()
        ))
    }

    /// Free-form query for job-search APIs
    pub fn listing_query(&self, criteria: &SearchCriteria) -> String {
        format!(
            "{} {} in {}",
            criteria.skills(),
            criteria.interest(),
            self.region
        )
    }

    fn restricted(&self, base: String) -> String {
        if self.site_filter.is_empty() {
            base
        } else {
            format!("{} {}", base, self.site_filter)
        }
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

/// `site:a OR site:b OR ...`
fn site_filter(sites: &[&str]) -> String {
    sites
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| format!("site:{}", s))
        .collect::<Vec<_>>()
        .join(" OR ")
}
