//! Search Client
//!
//! Cached front for a `ListingSource`. Failures never escape: they are
//! logged, reported on the outcome and turned into an empty response so the
//! caller can still render "no results".

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::cache::{CacheKey, ResponseCache};
use crate::domain::{DomainError, Provider, SearchResponse};
use crate::ports::ListingSource;

/// Default number of results requested per query
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Result of one `search` call
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub response: SearchResponse,
    /// Set when the provider call failed; `response` is then empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the response came from the cache
    pub cached: bool,
}

impl SearchOutcome {
    fn fresh(response: SearchResponse) -> Self {
        Self {
            response,
            error: None,
            cached: false,
        }
    }

    fn cached(response: SearchResponse) -> Self {
        Self {
            response,
            error: None,
            cached: true,
        }
    }

    fn failed(error: &DomainError) -> Self {
        Self {
            response: SearchResponse::empty(),
            error: Some(error.to_string()),
            cached: false,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Provider-agnostic search client with time-bounded memoization
pub struct SearchClient {
    source: Arc<dyn ListingSource>,
    cache: ResponseCache,
}

impl SearchClient {
    /// Creates a client using the provider's default cache window
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        let ttl = source.provider().default_cache_ttl();
        Self {
            source,
            cache: ResponseCache::new(ttl),
        }
    }

    /// Overrides the cache window
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = ResponseCache::new(ttl);
        self
    }

    pub fn provider(&self) -> Provider {
        self.source.provider()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Run a query, serving from cache when possible
    pub async fn search(&self, query: &str, count: usize) -> SearchOutcome {
        let key = CacheKey {
            provider: self.source.provider(),
            query: query.to_string(),
            count,
            credential: self.source.credential_fingerprint(),
        };

        if let Some(response) = self.cache.get(&key) {
            debug!(provider = %key.provider, query = %query, "Cache hit");
            return SearchOutcome::cached(response);
        }

        debug!(provider = %key.provider, query = %query, "Cache miss");
        info!(provider = %key.provider, count = count, "Querying search provider");

        match self.source.fetch(query, count).await {
            Ok(response) => {
                info!(
                    provider = %key.provider,
                    results = response.listings().len(),
                    has_results_key = response.has_results_key(),
                    "Search completed"
                );
                self.cache.insert(key, response.clone());
                SearchOutcome::fresh(response)
            }
            Err(err) => {
                warn!(provider = %key.provider, error = %err, "Search failed");
                SearchOutcome::failed(&err)
            }
        }
    }
}
