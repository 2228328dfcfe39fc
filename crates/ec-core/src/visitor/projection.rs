//! VisitorListProjection: (visitors, filter) → (page slice, pagination).
//!
//! Pure and total. Recomputed from the full snapshot on every interaction.

use serde::{Deserialize, Serialize};

use super::collation::sort_by_name;
use super::filter::{ListFilter, StatusFilter};
use super::model::Visitor;
use super::pagination::Pagination;
use super::search::SearchQuery;

/// One rendered page of a visitor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorPage {
    pub items: Vec<Visitor>,
    pub pagination: Pagination,
}

impl VisitorPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Applies search, then status, then the name sort. The result is the full
/// matching list, before pagination.
pub fn filter_and_sort(visitors: &[Visitor], search: &str, status: StatusFilter) -> Vec<Visitor> {
    let query = SearchQuery::parse(search);
    let mut matching: Vec<Visitor> = visitors
        .iter()
        .filter(|v| query.matches(v))
        .filter(|v| status.matches(v))
        .cloned()
        .collect();
    sort_by_name(&mut matching);
    matching
}

/// Number of records passing search and status, without sorting.
pub fn count_matching(visitors: &[Visitor], search: &str, status: StatusFilter) -> usize {
    let query = SearchQuery::parse(search);
    visitors
        .iter()
        .filter(|v| query.matches(v) && status.matches(v))
        .count()
}

/// Projects `visitors` through `filter`. A page beyond the last one is
/// clamped to the last page.
pub fn project(visitors: &[Visitor], filter: &ListFilter) -> VisitorPage {
    let mut matching = filter_and_sort(visitors, &filter.search, filter.status);
    let pagination = Pagination::new(matching.len(), filter.items_per_page, filter.page);
    let range = pagination.range();
    matching.truncate(range.end);
    let items = matching.split_off(range.start);

    VisitorPage { items, pagination }
}
