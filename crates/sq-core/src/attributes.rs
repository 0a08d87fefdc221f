//! Static widget attributes read once at attach time

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::navigation::{AdjacentUnit, AdjacentUnits};

/// Display labels for the footer previous/next buttons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonLabels {
    pub prev: String,
    pub next: String,
    /// Shown on the next button on the last page when the next unit is the course root
    pub end: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            prev: "Previous Page".to_string(),
            next: "Next Page".to_string(),
            end: "End".to_string(),
        }
    }
}

/// Everything a sequence widget reads from its rendered markup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceAttributes {
    /// Number of navigable pages (one content pane and one nav tab each)
    pub page_count: usize,

    /// Server-persisted position, used when no entry directive is present
    #[serde(default)]
    pub position: usize,

    #[serde(default)]
    pub labels: ButtonLabels,

    /// href of the previous-unit link; absent means there is no previous unit
    #[serde(default)]
    pub previous_href: Option<String>,

    /// href of the next-unit link; absent means there is no next unit
    #[serde(default)]
    pub next_href: Option<String>,

    /// Non-page entries at the head of the nav list (the "previous" arrow)
    #[serde(default = "default_leading_nav_entries")]
    pub leading_nav_entries: usize,
}

fn default_leading_nav_entries() -> usize {
    1
}

impl SequenceAttributes {
    /// Attributes for a standalone widget with `page_count` pages
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            position: 0,
            labels: ButtonLabels::default(),
            previous_href: None,
            next_href: None,
            leading_nav_entries: default_leading_nav_entries(),
        }
    }

    /// Parse attributes from their JSON form
    pub fn from_json(json: &str) -> Result<Self, NavigationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn with_previous_href(mut self, href: impl Into<String>) -> Self {
        self.previous_href = Some(href.into());
        self
    }

    pub fn with_next_href(mut self, href: impl Into<String>) -> Self {
        self.next_href = Some(href.into());
        self
    }

    /// Index of the last page; fails when the widget has no pages at all
    pub fn last_index(&self) -> Result<usize, NavigationError> {
        self.page_count.checked_sub(1).ok_or(NavigationError::NoPages)
    }

    /// Adjacent units resolved from the previous/next hrefs
    pub fn adjacent_units(&self) -> AdjacentUnits {
        AdjacentUnits {
            previous: self.previous_href.as_deref().map(AdjacentUnit::from_href),
            next: self.next_href.as_deref().map(AdjacentUnit::from_href),
        }
    }
}
