//! Infrastructure Adapters
//!
//! Implementations of `ListingSource` for concrete search providers.

pub mod http;
pub mod jsearch;
pub mod serpapi;

// Re-exports
pub use jsearch::JSearchSource;
pub use serpapi::SerpApiSource;
