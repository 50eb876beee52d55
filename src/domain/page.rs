//! Page window snapshot.
//!
//! [`PageInfo`] is the value object handed to displays alongside the items of
//! the current page. It is derived data: the provider rebuilds it on every
//! recompute and every page move.

use serde::{Deserialize, Serialize};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Snapshot of the current page window.
///
/// # Fields
///
/// - `page`: Zero-based index of the current page, always within `[0, pages() - 1]`
/// - `page_size`: Maximum number of items per page, at least 1
/// - `visible`: Number of items on the current page
/// - `total`: Number of items passing the filters
///
/// # Examples
///
/// ```
/// use pagewise::PageInfo;
///
/// let info = PageInfo { page: 2, page_size: 2, visible: 1, total: 5 };
/// assert_eq!(info.pages(), 3);
/// assert_eq!(info.from(), 5);
/// assert_eq!(info.to(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub visible: usize,
    pub total: usize,
}

impl PageInfo {
    /// Number of pages for the filtered total, never less than 1.
    #[must_use]
    pub fn pages(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    /// One-based position of the first visible item, 0 when nothing is visible.
    #[must_use]
    pub fn from(&self) -> usize {
        if self.visible == 0 {
            0
        } else {
            self.page * self.page_size.max(1) + 1
        }
    }

    /// One-based position of the last visible item, 0 when nothing is visible.
    #[must_use]
    pub fn to(&self) -> usize {
        if self.visible == 0 {
            0
        } else {
            self.from() + self.visible - 1
        }
    }
}

/// `ceil(total / page_size)`, minimum 1. A zero page size counts as 1.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn test_empty_window() {
        let info = PageInfo { page: 0, page_size: 10, visible: 0, total: 0 };
        assert_eq!(info.pages(), 1);
        assert_eq!(info.from(), 0);
        assert_eq!(info.to(), 0);
    }

    #[test]
    fn test_middle_page_bounds() {
        let info = PageInfo { page: 1, page_size: 4, visible: 4, total: 10 };
        assert_eq!(info.from(), 5);
        assert_eq!(info.to(), 8);
    }
}
