use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{FollowupStatus, ParseFollowupStatusError, Visitor};

/// Status pill selection: everything, or a single follow-up status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(FollowupStatus),
}

impl StatusFilter {
    pub fn matches(&self, visitor: &Visitor) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => visitor.followup_status == *status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl From<FollowupStatus> for StatusFilter {
    fn from(status: FollowupStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseFollowupStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

/// Everything the projection needs besides the records themselves.
///
/// `search` is the committed (debounced) value, never the raw keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub search: String,
    pub status: StatusFilter,
    pub page: usize,
    pub items_per_page: usize,
}

impl ListFilter {
    pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

    pub fn new(items_per_page: usize) -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            page: 1,
            items_per_page,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

impl Default for ListFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITEMS_PER_PAGE)
    }
}
