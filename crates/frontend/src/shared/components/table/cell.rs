//! Cell values and the row projection the table reads through.

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A single displayable value. The table never looks past this projection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl CellValue {
    /// String form used both for filtering and for raw display.
    ///
    /// Numbers use the shortest round-trip decimal, so `100.0` becomes "100"
    /// and `1234.5` becomes "1234.5".
    pub fn to_filter_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Numeric view of the value, also accepting numeric-looking text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Projection of a caller's record into table cells.
///
/// Unknown column ids must return `CellValue::Empty`; the table renders those
/// as empty cells instead of failing.
pub trait TableRow {
    /// Stable identity used for keyed rendering.
    fn row_key(&self) -> String;

    fn cell(&self, column_id: &str) -> CellValue;
}

/// Loosely-typed row built from a map, for callers without a typed record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRow {
    pub key: String,
    pub cells: BTreeMap<String, CellValue>,
}

impl MapRow {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn with(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }
}

impl TableRow for MapRow {
    fn row_key(&self) -> String {
        self.key.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        self.cells.get(column_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_stringification() {
        assert_eq!(CellValue::from(100.0).to_filter_string(), "100");
        assert_eq!(CellValue::from(1234.5).to_filter_string(), "1234.5");
        assert_eq!(CellValue::from(3u32).to_filter_string(), "3");
    }

    #[test]
    fn test_other_stringification() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(CellValue::from(d).to_filter_string(), "2024-03-15");
        assert_eq!(CellValue::from(true).to_filter_string(), "true");
        assert_eq!(CellValue::Empty.to_filter_string(), "");
        assert_eq!(CellValue::from(None::<String>), CellValue::Empty);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::from(12.5).as_number(), Some(12.5));
        assert_eq!(CellValue::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(CellValue::from("abc").as_number(), None);
        assert_eq!(CellValue::from(true).as_number(), None);
    }

    #[test]
    fn test_map_row_missing_column_is_empty() {
        let row = MapRow::new("r1").with("city", "Paris");
        assert_eq!(row.cell("city"), CellValue::from("Paris"));
        assert_eq!(row.cell("country"), CellValue::Empty);
    }
}
