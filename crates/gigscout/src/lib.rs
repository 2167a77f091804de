//! gigscout
//!
//! Internship and job discovery over third-party search APIs.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): entities, value objects, errors and pure
//!   services (query building, pay classification, skill advice)
//! - **Ports** (`ports/`): the `ListingSource` interface providers implement
//! - **Services** (`services/`): the cached `SearchClient`
//! - **Adapters** (`adapters/`): SerpApi and JSearch HTTP implementations
//! - **Application** (`application/`): the `Finder` that runs a search action
//! - **Render** (`render`): plain-text and Markdown output
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gigscout::{Finder, SearchClient, SearchCriteria, SerpApiSource, render, RenderStyle};
//!
//! let source = Arc::new(SerpApiSource::new(api_key));
//! let finder = Finder::new(SearchClient::new(source));
//! let criteria = SearchCriteria::new("Python, SQL", "Data Science")?;
//! let report = finder.find(&criteria).await;
//! println!("{}", render(&report, RenderStyle::Plain));
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod render;
pub mod services;

// Re-export commonly used types
pub use adapters::{JSearchSource, SerpApiSource};
pub use application::Finder;
pub use domain::{
    advise, classify, Advice, DomainError, JobDetails, Listing, ListingGroup, ListingLayout,
    Notice, PayBuckets, Provider, QueryBuilder, Report, SearchCriteria, SearchResponse, Section,
    Suggestion, Track,
};
pub use ports::ListingSource;
pub use render::{render, RenderStyle};
pub use services::{ResponseCache, SearchClient, SearchOutcome, DEFAULT_RESULT_COUNT};
