//! Rendering policy: how each column type turns a cell into text or a badge.

use super::cell::CellValue;
use super::column::{Column, ColumnType};
use super::number_format::format_number_grouped;

pub const CURRENCY_SYMBOL: &str = "$";

pub const DEFAULT_EMPTY_MESSAGE: &str = "No results found";

/// Zero-decimal en-US currency, e.g. `1234.5` -> "$1,235", `-3.0` -> "-$3".
pub fn format_currency(value: f64) -> String {
    let grouped = format_number_grouped(value, 0, ',');
    match grouped.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
        None => format!("{}{}", CURRENCY_SYMBOL, grouped),
    }
}

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl StatusTone {
    /// Variant name understood by the shared `Badge` component.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Error => "error",
            StatusTone::Info => "primary",
            StatusTone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAppearance {
    pub tone: StatusTone,
    /// Filled for known statuses, outlined otherwise.
    pub filled: bool,
}

/// Badge look for a literal status string. Unknown values get a neutral outline.
pub fn status_appearance(status: &str) -> StatusAppearance {
    let tone = match status.trim().to_ascii_lowercase().as_str() {
        "confirmed" | "active" | "available" | "paid" | "checked-in" => StatusTone::Success,
        "pending" | "maintenance" | "partial" => StatusTone::Warning,
        "cancelled" | "inactive" | "blocked" | "refunded" => StatusTone::Error,
        "completed" | "checked-out" | "occupied" => StatusTone::Info,
        _ => {
            return StatusAppearance {
                tone: StatusTone::Neutral,
                filled: false,
            }
        }
    };
    StatusAppearance { tone, filled: true }
}

/// Up to two uppercase initials, "?" for an empty name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Five-star strip for a 0..=5 rating, e.g. `4.2` -> "★★★★☆ 4.2".
pub fn format_rating(value: f64) -> String {
    let clamped = value.clamp(0.0, 5.0);
    let full = clamped.round() as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), clamped)
}

/// Display text of a cell according to its column type.
///
/// Currency and rating cells that are not numeric fall back to the raw string.
pub fn render_cell_text(column: &Column, value: &CellValue) -> String {
    match column.column_type {
        ColumnType::Currency => value
            .as_number()
            .map(format_currency)
            .unwrap_or_else(|| value.to_filter_string()),
        ColumnType::Rating => value
            .as_number()
            .map(format_rating)
            .unwrap_or_else(|| value.to_filter_string()),
        _ => value.to_filter_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,235");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.49), "$999");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-1234.5), "-$1,235");
    }

    #[test]
    fn test_known_statuses_are_filled() {
        let a = status_appearance("Confirmed");
        assert_eq!(a.tone, StatusTone::Success);
        assert!(a.filled);
        assert_eq!(status_appearance("PENDING").tone, StatusTone::Warning);
        assert_eq!(status_appearance("cancelled").tone, StatusTone::Error);
        assert_eq!(status_appearance("Checked-out").tone, StatusTone::Info);
    }

    #[test]
    fn test_unknown_status_is_neutral_outline() {
        let a = status_appearance("Waitlisted");
        assert_eq!(a, StatusAppearance { tone: StatusTone::Neutral, filled: false });
        assert_eq!(a.tone.badge_variant(), "neutral");
        assert_eq!(status_appearance("").tone, StatusTone::Neutral);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Emma Schneider"), "ES");
        assert_eq!(initials("anna maria lopez"), "AM");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("  "), "?");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.2), "★★★★☆ 4.2");
        assert_eq!(format_rating(9.0), "★★★★★ 5.0");
        assert_eq!(format_rating(0.0), "☆☆☆☆☆ 0.0");
    }

    #[test]
    fn test_render_cell_text() {
        let price = Column::new("price", "Price", ColumnType::Currency);
        assert_eq!(render_cell_text(&price, &CellValue::from(1234.5)), "$1,235");
        assert_eq!(render_cell_text(&price, &CellValue::from("n/a")), "n/a");
        assert_eq!(render_cell_text(&price, &CellValue::Empty), "");

        let city = Column::text("city", "City");
        assert_eq!(render_cell_text(&city, &CellValue::from("Paris")), "Paris");

        let when = Column::new("when", "When", ColumnType::Date);
        let d = chrono::NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert_eq!(render_cell_text(&when, &CellValue::from(d)), "2024-07-10");
    }
}
