//! ListingLayout - How a group of listings is laid out when rendered

use serde::{Deserialize, Serialize};

/// Per-item layout for a listing group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingLayout {
    /// Numbered title link followed by the snippet
    #[default]
    Snippet,
    /// Title heading followed by employer, location, pay and dates
    JobCard,
}
