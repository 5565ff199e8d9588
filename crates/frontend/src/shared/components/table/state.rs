//! Table-owned filter and pagination state.

use super::cell::TableRow;
use super::column::Column;
use super::filter::{filter_rows, FilterState};
use super::pagination::{is_allowed_page_size, Pagination, PAGE_SIZE_OPTIONS};

pub use super::pagination::VisibleRows;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub filters: FilterState,
    pub pagination: Pagination,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.pagination.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.pagination.rows_per_page
    }

    /// Updates one column's filter and returns to the first page.
    pub fn set_filter(&mut self, column_id: &str, value: &str) {
        self.filters.set(column_id, value);
        self.pagination.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pagination.page = 0;
    }

    /// Not clamped: a page past the end shows an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page;
    }

    /// Accepts only the fixed page sizes and returns to the first page.
    pub fn set_rows_per_page(&mut self, size: usize) -> Result<(), String> {
        if !is_allowed_page_size(size) {
            return Err(format!(
                "Unsupported page size {}, expected one of {:?}",
                size, PAGE_SIZE_OPTIONS
            ));
        }
        self.pagination.rows_per_page = size;
        self.pagination.page = 0;
        Ok(())
    }

    /// Filters, then slices the current page. Pure in its inputs.
    pub fn compute_visible_rows<'a, T: TableRow>(
        &self,
        rows: &'a [T],
        columns: &[Column],
    ) -> VisibleRows<&'a T> {
        let filtered = filter_rows(rows, columns, &self.filters);
        self.pagination.paginate(&filtered)
    }
}
