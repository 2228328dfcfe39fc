use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Pagination metadata for a fully filtered and sorted list.
///
/// `total_pages` is never below 1 so an empty list still renders as
/// "page 1 of 1", and `current_page` is always inside `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl Pagination {
    /// Builds the metadata, clamping `requested_page` into range.
    /// An `items_per_page` of 0 is treated as 1.
    pub fn new(total_items: usize, items_per_page: usize, requested_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = Self::total_pages_for(total_items, items_per_page);
        Self {
            current_page: requested_page.clamp(1, total_pages),
            total_pages,
            total_items,
            items_per_page,
        }
    }

    pub fn total_pages_for(total_items: usize, items_per_page: usize) -> usize {
        total_items.div_ceil(items_per_page.max(1)).max(1)
    }

    /// Half-open index range of the current page inside the full list.
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.total_items);
        start.min(end)..end
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Page after this one, or the same page when already on the last.
    pub fn next_page(&self) -> usize {
        if self.has_next() {
            self.current_page + 1
        } else {
            self.current_page
        }
    }

    /// Page before this one, or the same page when already on the first.
    pub fn prev_page(&self) -> usize {
        if self.has_prev() {
            self.current_page - 1
        } else {
            self.current_page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(Pagination::total_pages_for(0, 10), 1);
        assert_eq!(Pagination::total_pages_for(10, 10), 1);
        assert_eq!(Pagination::total_pages_for(11, 10), 2);
        assert_eq!(Pagination::total_pages_for(25, 10), 3);
    }

    #[test]
    fn test_total_pages_matches_ceil_division() {
        for total in 0..60 {
            for per_page in 1..12 {
                let expected = std::cmp::max(1, (total + per_page - 1) / per_page);
                assert_eq!(Pagination::total_pages_for(total, per_page), expected);
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let p = Pagination::new(11, 10, 7);
        assert_eq!(p.current_page, 2);
        assert_eq!(p.range(), 10..11);

        let p = Pagination::new(0, 10, 3);
        assert_eq!(p.current_page, 1);
        assert_eq!(p.range(), 0..0);

        let p = Pagination::new(5, 10, 0);
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_navigation_is_clamped_not_wrapping() {
        let first = Pagination::new(30, 10, 1);
        assert!(!first.has_prev());
        assert_eq!(first.prev_page(), 1);
        assert_eq!(first.next_page(), 2);

        let last = Pagination::new(30, 10, 3);
        assert!(!last.has_next());
        assert_eq!(last.next_page(), 3);
        assert_eq!(last.prev_page(), 2);
    }

    #[test]
    fn test_zero_items_per_page_is_treated_as_one() {
        let p = Pagination::new(3, 0, 2);
        assert_eq!(p.items_per_page, 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.range(), 1..2);
    }
}
