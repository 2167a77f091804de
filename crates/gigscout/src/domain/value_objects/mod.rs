//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod listing_layout;
mod provider;

pub use listing_layout::*;
pub use provider::*;
