//! Listing Source Port
//!
//! Abstract interface for search providers that return listings.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::{DomainError, Provider, SearchResponse};

/// Service interface for a search provider
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Which provider this source talks to
    fn provider(&self) -> Provider;

    /// Stable, non-reversible identity of the credential in use
    ///
    /// Part of the cache key so that rotating a key invalidates
    /// memoized responses.
    fn credential_fingerprint(&self) -> String;

    /// Run one query against the provider
    async fn fetch(&self, query: &str, count: usize) -> Result<SearchResponse, DomainError>;
}

/// Short SHA-256 digest of a secret, safe to keep in memory and logs
pub fn fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex::encode(&digest[..8])
}
