//! Report - Everything produced by one search action, ready to render

use serde::{Deserialize, Serialize};

use crate::domain::entities::Listing;
use crate::domain::services::Advice;
use crate::domain::value_objects::ListingLayout;

/// User-visible status message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "level", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }
}

/// A labelled, scoped block of listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingGroup {
    pub header: String,
    /// Shown instead of items when `listings` is empty
    pub empty_message: String,
    pub layout: ListingLayout,
    pub listings: Vec<Listing>,
}

impl ListingGroup {
    /// Group whose placeholder reads "No {label} found for your query."
    pub fn labelled(
        icon: &str,
        label: &str,
        layout: ListingLayout,
        listings: Vec<Listing>,
    ) -> Self {
        let header = if icon.is_empty() {
            label.to_string()
        } else {
            format!("{} {}", icon, label)
        };

        Self {
            header,
            empty_message: format!("No {} found for your query.", label.to_lowercase()),
            layout,
            listings,
        }
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// A titled part of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
    pub groups: Vec<ListingGroup>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notices: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn with_group(mut self, group: ListingGroup) -> Self {
        self.groups.push(group);
        self
    }
}

/// Full result of one search action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
    pub sections: Vec<Section>,
    pub advice: Advice,
}

impl Report {
    /// Total listings across every group
    pub fn listing_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.groups.iter())
            .map(|g| g.listings.len())
            .sum()
    }
}
