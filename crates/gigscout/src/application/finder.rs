//! Finder - Runs one search action end to end
//!
//! Picks the flow from the provider behind the search client:
//! - SerpApi: internship + job web searches, internships split by pay
//! - JSearch: a single job-listing search
//!
//! Both flows append skill advice. Searches run one after the other.

use tracing::info;

use crate::domain::{
    advise, classify, ListingGroup, ListingLayout, Notice, Provider, QueryBuilder, Report,
    SearchCriteria, Section,
};
use crate::services::{SearchClient, SearchOutcome, DEFAULT_RESULT_COUNT};

pub const INTERNSHIPS_TITLE: &str = "🎓 Internships";
pub const JOBS_TITLE: &str = "💼 Job Opportunities";
pub const RESULTS_TITLE: &str = "🚀 Results";
pub const NO_INTERNSHIPS_WARNING: &str = "No internship listings found or an error occurred.";
pub const NO_JOBS_WARNING: &str = "No job listings found or an error occurred.";
pub const SEARCH_FAILED: &str = "An error occurred while searching. Please try again.";
pub const NO_RESULTS: &str = "No results found.";

/// Application service composing query building, search and classification
pub struct Finder {
    client: SearchClient,
    queries: QueryBuilder,
    result_count: usize,
}

impl Finder {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            queries: QueryBuilder::default(),
            result_count: DEFAULT_RESULT_COUNT,
        }
    }

    pub fn with_query_builder(mut self, queries: QueryBuilder) -> Self {
        self.queries = queries;
        self
    }

    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    pub fn provider(&self) -> Provider {
        self.client.provider()
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// Run every search for `criteria` and assemble the report
    pub async fn find(&self, criteria: &SearchCriteria) -> Report {
        info!(
            provider = %self.provider(),
            skills = %criteria.skills(),
            interest = %criteria.interest(),
            "Finding opportunities"
        );

        let (notices, sections) = match self.provider() {
            Provider::SerpApi => self.find_on_web(criteria).await,
            Provider::JSearch => self.find_job_listings(criteria).await,
        };

        Report {
            notices,
            sections,
            advice: advise(criteria.interest()),
        }
    }

    async fn find_on_web(&self, criteria: &SearchCriteria) -> (Vec<Notice>, Vec<Section>) {
        let internship_query = self.queries.internship_query(criteria);
        let job_query = self.queries.job_query(criteria);

        let internships = self.client.search(&internship_query, self.result_count).await;
        let jobs = self.client.search(&job_query, self.result_count).await;

        let mut notices = Vec::new();
        if internships.is_failure() && jobs.is_failure() {
            notices.push(Notice::Error(SEARCH_FAILED.to_string()));
        }

        (
            notices,
            vec![internship_section(internships), job_section(jobs)],
        )
    }

    async fn find_job_listings(&self, criteria: &SearchCriteria) -> (Vec<Notice>, Vec<Section>) {
        let query = self.queries.listing_query(criteria);
        let outcome = self.client.search(&query, self.result_count).await;

        let section = section_with_status(RESULTS_TITLE, &outcome, NO_JOBS_WARNING).with_group(
            ListingGroup::labelled(
                "",
                "Opportunities",
                ListingLayout::JobCard,
                outcome.response.into_listings(),
            )
            .with_empty_message(NO_RESULTS),
        );

        (Vec::new(), vec![section])
    }
}

fn internship_section(outcome: SearchOutcome) -> Section {
    let section = section_with_status(INTERNSHIPS_TITLE, &outcome, NO_INTERNSHIPS_WARNING);
    let buckets = classify(outcome.response.into_listings());

    section
        .with_group(ListingGroup::labelled(
            "💰",
            "Paid Internships",
            ListingLayout::Snippet,
            buckets.paid,
        ))
        .with_group(ListingGroup::labelled(
            "🎓",
            "Unpaid/Unspecified Internships",
            ListingLayout::Snippet,
            buckets.unpaid,
        ))
}

fn job_section(outcome: SearchOutcome) -> Section {
    let section = section_with_status(JOBS_TITLE, &outcome, NO_JOBS_WARNING);

    section.with_group(ListingGroup::labelled(
        "",
        "Available Jobs",
        ListingLayout::Snippet,
        outcome.response.into_listings(),
    ))
}

/// Section carrying the outcome's error, or else its missing-results warning
fn section_with_status(title: &str, outcome: &SearchOutcome, missing_warning: &str) -> Section {
    let section = Section::new(title);

    match &outcome.error {
        Some(error) => section.with_notice(Notice::Error(error.clone())),
        None if !outcome.response.has_results_key() => {
            section.with_notice(Notice::Warning(missing_warning.to_string()))
        }
        None => section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Advice, DomainError, Listing, SearchResponse, Track};
    use crate::services::search_client::tests::FakeSource;
    use std::sync::Arc;

    fn criteria() -> SearchCriteria {
        SearchCriteria::new("Python, SQL", "Data Science").unwrap()
    }

    fn finder(source: Arc<FakeSource>) -> Finder {
        Finder::new(SearchClient::new(source))
    }

    #[tokio::test]
    async fn test_web_flow_buckets_stipend_listing() {
        let response = SearchResponse::with_listings(vec![Listing::new(
            "Data Science Intern",
            "https://internshala.com/1",
        )
        .with_snippet("₹20,000 stipend")]);
        let source = Arc::new(FakeSource::returning(Provider::SerpApi, response));

        let report = finder(source.clone()).find(&criteria()).await;

        let queries = source.queries.lock().unwrap().clone();
        assert_eq!(queries.len(), 2);
        assert!(queries.iter().all(|q| q.contains("Python, SQL") && q.contains("Data Science")));
        assert!(queries[0].contains("internship"));
        assert!(queries[1].contains("jobs"));

        let internships = &report.sections[0];
        assert_eq!(internships.title, INTERNSHIPS_TITLE);
        assert_eq!(internships.groups[0].listings.len(), 1);
        assert!(internships.groups[1].listings.is_empty());
        assert!(internships.notices.is_empty());

        assert_eq!(report.advice.tracks(), vec![Track::Data]);
        assert!(report.notices.is_empty());
    }

    #[tokio::test]
    async fn test_missing_results_key_warns_and_keeps_groups() {
        let source = Arc::new(FakeSource::returning(Provider::SerpApi, SearchResponse::empty()));

        let report = finder(source).find(&criteria()).await;

        let internships = &report.sections[0];
        assert_eq!(
            internships.notices,
            vec![Notice::Warning(NO_INTERNSHIPS_WARNING.to_string())]
        );
        assert_eq!(internships.groups.len(), 2);
        assert!(internships.groups.iter().all(|g| g.is_empty()));

        let jobs = &report.sections[1];
        assert_eq!(jobs.notices, vec![Notice::Warning(NO_JOBS_WARNING.to_string())]);
        assert!(report.notices.is_empty());
    }

    #[tokio::test]
    async fn test_both_failures_add_report_error() {
        let source = Arc::new(FakeSource::failing(
            Provider::SerpApi,
            DomainError::ExternalService("timeout".to_string()),
        ));

        let report = finder(source).find(&criteria()).await;

        assert_eq!(report.notices, vec![Notice::Error(SEARCH_FAILED.to_string())]);
        assert_eq!(report.listing_count(), 0);
        for section in &report.sections {
            assert_eq!(section.notices.len(), 1);
            assert!(matches!(section.notices[0], Notice::Error(_)));
        }
        assert!(matches!(report.advice, Advice::Suggestions(_)));
    }

    #[tokio::test]
    async fn test_job_listing_flow_single_query() {
        let response = SearchResponse::with_listings(vec![Listing::new("Backend", "#")]);
        let source = Arc::new(FakeSource::returning(Provider::JSearch, response));

        let report = finder(source.clone()).find(&criteria()).await;

        assert_eq!(source.calls(), 1);
        assert_eq!(
            source.queries.lock().unwrap()[0],
            "Python, SQL Data Science in India"
        );
        assert_eq!(report.sections.len(), 1);
        let group = &report.sections[0].groups[0];
        assert_eq!(group.layout, ListingLayout::JobCard);
        assert_eq!(group.empty_message, NO_RESULTS);
        assert_eq!(group.listings.len(), 1);
    }

    #[tokio::test]
    async fn test_job_listing_failure_has_one_error() {
        let source = Arc::new(FakeSource::failing(
            Provider::JSearch,
            DomainError::ExternalService("JSearch API error (500): down".to_string()),
        ));

        let report = finder(source).find(&criteria()).await;

        assert!(report.notices.is_empty());
        let section = &report.sections[0];
        assert_eq!(section.notices.len(), 1);
        assert!(matches!(&section.notices[0], Notice::Error(msg) if msg.contains("down")));
        assert!(section.groups[0].is_empty());
        assert_eq!(section.groups[0].empty_message, NO_RESULTS);
    }

    #[tokio::test]
    async fn test_repeat_action_served_from_cache() {
        let source = Arc::new(FakeSource::returning(
            Provider::SerpApi,
            SearchResponse::with_listings(vec![]),
        ));
        let finder = finder(source.clone());

        finder.find(&criteria()).await;
        finder.find(&criteria()).await;

        assert_eq!(source.calls(), 2);
    }
}
