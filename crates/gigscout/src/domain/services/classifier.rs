//! Pay classifier
//!
//! Splits listings into paid and unpaid/unspecified by snippet keywords.
//! Plain substring matching: "unpaid" contains "paid" and lands in the paid
//! bucket. Listings are never dropped, only possibly misfiled.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Listing;

/// Lowercase tokens that mark a snippet as paid
pub const PAID_MARKERS: [&str; 3] = ["stipend", "paid", "₹"];

/// Stable partition of listings by pay signal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayBuckets {
    pub paid: Vec<Listing>,
    pub unpaid: Vec<Listing>,
}

impl PayBuckets {
    pub fn len(&self) -> usize {
        self.paid.len() + self.unpaid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether a snippet mentions pay (case-insensitive)
pub fn is_paid(snippet: Option<&str>) -> bool {
    let Some(snippet) = snippet else {
        return false;
    };
    let lowered = snippet.to_lowercase();
    PAID_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Partition listings preserving their relative order
pub fn classify(listings: Vec<Listing>) -> PayBuckets {
    let (paid, unpaid) = listings
        .into_iter()
        .partition(|listing| is_paid(listing.snippet.as_deref()));

    PayBuckets { paid, unpaid }
}
