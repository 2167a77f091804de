//! Domain Entities
//!
//! Core domain models for the search flow.

mod criteria;
mod listing;
mod report;

pub use criteria::*;
pub use listing::*;
pub use report::*;
