pub mod cache;
pub mod search_client;

// Re-exports
pub use cache::{CacheKey, ResponseCache};
pub use search_client::{SearchClient, SearchOutcome, DEFAULT_RESULT_COUNT};
