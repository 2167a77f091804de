//! Service Ports
//!
//! Abstract interfaces for external services.

mod listing_source;

pub use listing_source::*;
