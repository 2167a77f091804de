//! Response cache
//!
//! Time-bounded memoization of provider responses keyed by
//! (provider, query, count, credential fingerprint). Entries expire after a
//! fixed window and are dropped on the lookup that finds them stale. There
//! is no size bound.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::domain::{Provider, SearchResponse};

/// Identity of a memoized call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub provider: Provider,
    pub query: String,
    pub count: usize,
    pub credential: String,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    response: SearchResponse,
    inserted_at: Instant,
}

/// In-process, read-through response cache
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh response for `key`, if any
    pub fn get(&self, key: &CacheKey) -> Option<SearchResponse> {
        self.get_at(key, Instant::now())
    }

    pub fn insert(&self, key: CacheKey, response: SearchResponse) {
        self.insert_at(key, response, Instant::now());
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get_at(&self, key: &CacheKey, now: Instant) -> Option<SearchResponse> {
        let mut entries = self.lock();

        let fresh = match entries.get(key) {
            Some(entry) => now.saturating_duration_since(entry.inserted_at) < self.ttl,
            None => return None,
        };

        if fresh {
            entries.get(key).map(|entry| entry.response.clone())
        } else {
            entries.remove(key);
            None
        }
    }

    pub(crate) fn insert_at(&self, key: CacheKey, response: SearchResponse, now: Instant) {
        self.lock().insert(
            key,
            CacheEntry {
                response,
                inserted_at: now,
            },
        );
    }

    // A panic while holding the lock leaves the map itself intact.
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;

    fn key(query: &str, credential: &str) -> CacheKey {
        CacheKey {
            provider: Provider::SerpApi,
            query: query.to_string(),
            count: 10,
            credential: credential.to_string(),
        }
    }

    fn response() -> SearchResponse {
        SearchResponse::with_listings(vec![Listing::new("Intern", "https://example.com")])
    }

    #[test]
    fn test_hit_within_window() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let now = Instant::now();
        cache.insert_at(key("q", "k1"), response(), now);

        let hit = cache.get_at(&key("q", "k1"), now + Duration::from_secs(59));
        assert_eq!(hit, Some(response()));
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let now = Instant::now();
        cache.insert_at(key("q", "k1"), response(), now);

        assert!(cache.get_at(&key("q", "k1"), now + Duration::from_secs(60)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_credential_is_part_of_key() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert(key("q", "k1"), response());

        assert!(cache.get(&key("q", "k2")).is_none());
        assert!(cache.get(&key("other", "k1")).is_none());
        assert!(cache.get(&key("q", "k1")).is_some());
    }
}
