//! Page slicing and visual padding.

use std::ops::Range;

/// Allowed page sizes.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Slice bounds of the current page within `total` rows.
    ///
    /// Pages past the end produce an empty range.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.page.saturating_mul(self.rows_per_page).min(total);
        let end = start.saturating_add(self.rows_per_page).min(total);
        start..end
    }

    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 || self.rows_per_page == 0 {
            1
        } else {
            total.div_ceil(self.rows_per_page)
        }
    }

    /// Empty rows needed to keep a short page at full height.
    ///
    /// Only an empty filtered result gets none: the "no results" row
    /// replaces the body. A page past the end is padded in full.
    pub fn filler_rows(&self, page_len: usize, total_filtered: usize) -> usize {
        if total_filtered == 0 {
            0
        } else {
            self.rows_per_page.saturating_sub(page_len)
        }
    }

    /// Slices an already-filtered list. `R` is whatever the caller filtered:
    /// row references in tests, row indices in `DataTable`.
    pub fn paginate<R: Clone>(&self, filtered: &[R]) -> VisibleRows<R> {
        let total_filtered = filtered.len();
        let rows = filtered[self.range(total_filtered)].to_vec();
        VisibleRows {
            filler_rows: self.filler_rows(rows.len(), total_filtered),
            total_pages: self.total_pages(total_filtered),
            total_filtered,
            rows,
        }
    }
}

/// The rows to draw for the current page plus the numbers around them.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRows<R> {
    /// Data rows of the current page. Filler rows are never included.
    pub rows: Vec<R>,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub filler_rows: usize,
}

impl<R> VisibleRows<R> {
    /// True when nothing survived filtering.
    pub fn is_empty(&self) -> bool {
        self.total_filtered == 0
    }

    /// Body height in rows, not counting the "no results" row.
    pub fn body_len(&self) -> usize {
        self.rows.len() + self.filler_rows
    }
}

pub fn is_allowed_page_size(size: usize) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}
