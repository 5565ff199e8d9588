//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой.
///
/// Округление "от нуля" на половине (1234.5 -> 1235), как в `Intl.NumberFormat`,
/// а не банковское округление `format!("{:.0}")`.
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_grouped;
/// assert_eq!(format_number_grouped(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_grouped(value: f64, decimals: u8, separator: char) -> String {
    let decimals = decimals.min(6);
    let factor = 10f64.powi(i32::from(decimals));
    let rounded = (value.abs() * factor).round() / factor;
    let negative = value < 0.0 && rounded != 0.0;

    let formatted = format!("{:.*}", usize::from(decimals), rounded);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouped() {
        assert_eq!(format_number_grouped(1234567.891, 2, ','), "1,234,567.89");
        assert_eq!(format_number_grouped(999.0, 0, ','), "999");
        assert_eq!(format_number_grouped(1000.0, 0, ','), "1,000");
        assert_eq!(format_number_grouped(-1234.5, 0, ','), "-1,235");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_number_grouped(1234.5, 0, ','), "1,235");
        assert_eq!(format_number_grouped(0.5, 0, ','), "1");
        assert_eq!(format_number_grouped(2.5, 0, ','), "3");
        assert_eq!(format_number_grouped(-0.4, 0, ','), "0");
    }
}
