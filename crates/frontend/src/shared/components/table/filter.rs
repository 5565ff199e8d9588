//! Conjunctive per-column filtering.

use super::cell::TableRow;
use super::column::{Column, FilterMode};
use std::collections::BTreeMap;

/// Current raw filter inputs keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the value; blank input clears the entry.
    pub fn set(&mut self, column_id: &str, value: &str) {
        if value.trim().is_empty() {
            self.values.remove(column_id);
        } else {
            self.values.insert(column_id.to_string(), value.to_string());
        }
    }

    pub fn get(&self, column_id: &str) -> Option<&str> {
        self.values.get(column_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// A filter resolved against the schema once per pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFilter {
    pub column_id: String,
    pub needle: String,
    pub mode: FilterMode,
}

impl CompiledFilter {
    pub fn matches<T: TableRow>(&self, row: &T) -> bool {
        let haystack = row.cell(&self.column_id).to_filter_string();
        match self.mode {
            FilterMode::CaseInsensitive => haystack.to_lowercase().contains(&self.needle),
            FilterMode::Verbatim => haystack.contains(&self.needle),
            FilterMode::Disabled => true,
        }
    }
}

/// Builds the active filters. Unknown columns and non-filtering types drop out.
pub fn compile_filters(columns: &[Column], filters: &FilterState) -> Vec<CompiledFilter> {
    columns
        .iter()
        .filter_map(|column| {
            let value = filters.get(&column.id)?;
            let mode = column.filter_mode();
            let needle = match mode {
                FilterMode::Disabled => return None,
                FilterMode::CaseInsensitive => value.to_lowercase(),
                FilterMode::Verbatim => value.to_string(),
            };
            Some(CompiledFilter {
                column_id: column.id.clone(),
                needle,
                mode,
            })
        })
        .collect()
}

/// Rows satisfying every active filter, in input order.
pub fn filter_rows<'a, T: TableRow>(
    rows: &'a [T],
    columns: &[Column],
    filters: &FilterState,
) -> Vec<&'a T> {
    let compiled = compile_filters(columns, filters);
    rows.iter()
        .filter(|row| compiled.iter().all(|f| f.matches(*row)))
        .collect()
}

/// Positions of matching rows; lets reactive callers memoize without cloning rows.
pub fn filter_indices<T: TableRow>(rows: &[T], columns: &[Column], filters: &FilterState) -> Vec<usize> {
    let compiled = compile_filters(columns, filters);
    rows.iter()
        .enumerate()
        .filter(|(_, row)| compiled.iter().all(|f| f.matches(*row)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::cell::MapRow;
    use crate::shared::components::table::column::ColumnType;

    fn columns() -> Vec<Column> {
        vec![
            Column::text("name", "Name"),
            Column::text("city", "City"),
            Column::new("type", "Type", ColumnType::Select).options(["Hotel", "Villa"]),
            Column::new("rooms", "Rooms", ColumnType::Number),
            Column::new("status", "Status", ColumnType::Status),
        ]
    }

    fn rows() -> Vec<MapRow> {
        vec![
            MapRow::new("1")
                .with("name", "Grand Hotel")
                .with("city", "Paris")
                .with("type", "Hotel")
                .with("rooms", 120.0)
                .with("status", "Active"),
            MapRow::new("2")
                .with("name", "Villa Rose")
                .with("city", "Paris")
                .with("type", "Villa")
                .with("rooms", 6.0)
                .with("status", "Inactive"),
            MapRow::new("3")
                .with("name", "Sea Lodge")
                .with("city", "Nice")
                .with("type", "Villa")
                .with("rooms", 12.0)
                .with("status", "Active"),
        ]
    }

    fn keys(rows: &[&MapRow]) -> Vec<String> {
        rows.iter().map(|r| r.key.clone()).collect()
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("city", "par");
        f.set("type", "Villa");
        assert_eq!(keys(&filter_rows(&rows, &columns(), &f)), vec!["2"]);
    }

    #[test]
    fn test_text_match_ignores_case() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("name", "OTEL");
        assert_eq!(keys(&filter_rows(&rows, &columns(), &f)), vec!["1"]);
    }

    #[test]
    fn test_number_match_is_substring() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("rooms", "12");
        assert_eq!(keys(&filter_rows(&rows, &columns(), &f)), vec!["1", "3"]);
    }

    #[test]
    fn test_status_column_never_filters() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("status", "Inactive");
        assert_eq!(filter_rows(&rows, &columns(), &f).len(), 3);
    }

    #[test]
    fn test_mismatched_value_yields_no_rows() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("rooms", "abc");
        assert!(filter_rows(&rows, &columns(), &f).is_empty());
    }

    #[test]
    fn test_unknown_column_filter_is_ignored() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("country", "France");
        assert_eq!(filter_rows(&rows, &columns(), &f).len(), 3);
    }

    #[test]
    fn test_column_missing_from_rows_matches_nothing() {
        let rows = rows();
        let cols = vec![Column::text("owner", "Owner")];
        let mut f = FilterState::new();
        f.set("owner", "x");
        assert!(filter_rows(&rows, &cols, &f).is_empty());
    }

    #[test]
    fn test_blank_value_clears_filter() {
        let mut f = FilterState::new();
        f.set("name", "abc");
        assert_eq!(f.len(), 1);
        f.set("name", "   ");
        assert!(f.is_empty());
        assert_eq!(f.get("name"), None);
    }

    #[test]
    fn test_filter_indices_match_filter_rows() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("city", "PARIS");
        assert_eq!(filter_indices(&rows, &columns(), &f), vec![0, 1]);
        assert_eq!(filter_rows(&rows, &columns(), &f).len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let rows = rows();
        let mut f = FilterState::new();
        f.set("type", "villa");
        assert_eq!(keys(&filter_rows(&rows, &columns(), &f)), vec!["2", "3"]);
    }
}
