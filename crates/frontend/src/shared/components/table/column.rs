//! Column schema: typed column kinds and their filter behaviour.

use std::collections::HashSet;
use std::str::FromStr;

/// Column kind. Drives both the filter control and cell formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Select,
    Number,
    Status,
    Currency,
    Date,
    Avatar,
    Rating,
}

/// How a column's filter value is matched against its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Substring match ignoring case.
    CaseInsensitive,
    /// Substring match on the stringified value as-is.
    Verbatim,
    /// Column never constrains rows.
    Disabled,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Select => "select",
            ColumnType::Number => "number",
            ColumnType::Status => "status",
            ColumnType::Currency => "currency",
            ColumnType::Date => "date",
            ColumnType::Avatar => "avatar",
            ColumnType::Rating => "rating",
        }
    }

    pub fn filter_mode(&self) -> FilterMode {
        match self {
            ColumnType::Text | ColumnType::Select => FilterMode::CaseInsensitive,
            // String-level match, so "12" also matches 120 and 412
            ColumnType::Number => FilterMode::Verbatim,
            _ => FilterMode::Disabled,
        }
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ColumnType::Text),
            "select" => Ok(ColumnType::Select),
            "number" => Ok(ColumnType::Number),
            "status" => Ok(ColumnType::Status),
            "currency" => Ok(ColumnType::Currency),
            "date" => Ok(ColumnType::Date),
            "avatar" => Ok(ColumnType::Avatar),
            "rating" => Ok(ColumnType::Rating),
            other => Err(format!("Unknown column type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub column_type: ColumnType,
    /// CSS width, advisory only.
    pub width: Option<String>,
    /// Presentable values for select/status columns.
    pub options: Vec<String>,
    pub filterable: bool,
}

impl Column {
    pub fn new(id: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column_type,
            width: None,
            options: Vec::new(),
            filterable: true,
        }
    }

    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnType::Text)
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.column_type.filter_mode()
    }

    /// Whether a filter control is rendered in the filter row.
    pub fn shows_filter(&self) -> bool {
        self.filterable && self.filter_mode() != FilterMode::Disabled
    }
}

/// Rejects schemas with empty or duplicate column ids.
pub fn validate_schema(columns: &[Column]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for column in columns {
        if column.id.trim().is_empty() {
            return Err(format!("Column '{}' has an empty id", column.label));
        }
        if !seen.insert(column.id.as_str()) {
            return Err(format!("Duplicate column id: {}", column.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_type() {
        assert_eq!("currency".parse::<ColumnType>(), Ok(ColumnType::Currency));
        assert_eq!(" Status ".parse::<ColumnType>(), Ok(ColumnType::Status));
        assert!("percent".parse::<ColumnType>().is_err());
        for ty in [ColumnType::Text, ColumnType::Avatar, ColumnType::Rating] {
            assert_eq!(ty.as_str().parse::<ColumnType>(), Ok(ty));
        }
    }

    #[test]
    fn test_filter_modes() {
        assert_eq!(ColumnType::Text.filter_mode(), FilterMode::CaseInsensitive);
        assert_eq!(ColumnType::Select.filter_mode(), FilterMode::CaseInsensitive);
        assert_eq!(ColumnType::Number.filter_mode(), FilterMode::Verbatim);
        assert_eq!(ColumnType::Status.filter_mode(), FilterMode::Disabled);
        assert_eq!(ColumnType::Currency.filter_mode(), FilterMode::Disabled);
        assert_eq!(ColumnType::Date.filter_mode(), FilterMode::Disabled);
    }

    #[test]
    fn test_shows_filter() {
        assert!(Column::text("name", "Name").shows_filter());
        assert!(!Column::text("name", "Name").filterable(false).shows_filter());
        assert!(!Column::new("status", "Status", ColumnType::Status).shows_filter());
    }

    #[test]
    fn test_validate_schema() {
        let ok = vec![Column::text("a", "A"), Column::text("b", "B")];
        assert!(validate_schema(&ok).is_ok());

        let dup = vec![Column::text("a", "A"), Column::text("a", "Again")];
        assert_eq!(validate_schema(&dup), Err("Duplicate column id: a".to_string()));

        let empty = vec![Column::text(" ", "Blank")];
        assert!(validate_schema(&empty).is_err());
    }
}
