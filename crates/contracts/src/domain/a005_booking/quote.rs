//! Ориентировочный расчёт стоимости проживания.
//!
//! Расчёт показывается гостю в форме бронирования и не является
//! источником истины для итоговой суммы брони.

use crate::domain::a006_service::aggregate::Service;
use crate::domain::a007_seasonal_price::aggregate::SeasonalPrice;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Самый длинный срок, который считаем по ночам
pub const MAX_QUOTE_NIGHTS: i64 = 365;

/// Результат расчёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayQuote {
    pub nights: u32,
    pub room_total: f64,
    pub services_total: f64,
    pub total: f64,
}

/// Рассчитать стоимость проживания.
///
/// Каждая ночь считается по базовой цене, умноженной на коэффициент первого
/// сезона, покрывающего дату этой ночи (1.0, если сезона нет).
pub fn quote_stay(
    nightly_rate: f64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    seasons: &[SeasonalPrice],
    services: &[Service],
) -> Result<StayQuote, String> {
    if check_out <= check_in {
        return Err("Check-out must be after check-in".into());
    }
    let span = (check_out - check_in).num_days();
    if span > MAX_QUOTE_NIGHTS {
        return Err(format!(
            "Stay of {} nights exceeds the {}-night limit",
            span, MAX_QUOTE_NIGHTS
        ));
    }
    if !nightly_rate.is_finite() || nightly_rate < 0.0 {
        return Err(format!("Invalid nightly rate: {}", nightly_rate));
    }

    let mut nights = 0u32;
    let mut room_total = 0.0;
    for night in check_in.iter_days().take_while(|d| *d < check_out) {
        let multiplier = seasons
            .iter()
            .find(|s| s.covers(night))
            .map(|s| s.multiplier)
            .unwrap_or(1.0);
        room_total += nightly_rate * multiplier;
        nights += 1;
    }

    let services_total: f64 = services.iter().map(|s| s.charge_for(nights)).sum();

    Ok(StayQuote {
        nights,
        room_total,
        services_total,
        total: room_total + services_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_property::aggregate::PropertyId;
    use crate::domain::a006_service::aggregate::ServiceId;
    use crate::domain::a007_seasonal_price::aggregate::SeasonalPriceId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn high_season() -> SeasonalPrice {
        SeasonalPrice::new(
            SeasonalPriceId::from_u128(1),
            PropertyId::from_u128(1),
            "High",
            date(2024, 7, 1),
            date(2024, 7, 31),
            1.5,
        )
    }

    #[test]
    fn test_quote_without_seasons_or_services() {
        let q = quote_stay(100.0, date(2024, 3, 1), date(2024, 3, 4), &[], &[]).unwrap();
        assert_eq!(q.nights, 3);
        assert_eq!(q.room_total, 300.0);
        assert_eq!(q.total, 300.0);
    }

    #[test]
    fn test_quote_straddling_season_boundary() {
        // 29 и 30 июня по базовой цене, 1 и 2 июля с коэффициентом
        let q = quote_stay(100.0, date(2024, 6, 29), date(2024, 7, 3), &[high_season()], &[]).unwrap();
        assert_eq!(q.nights, 4);
        assert_eq!(q.room_total, 100.0 + 100.0 + 150.0 + 150.0);
    }

    #[test]
    fn test_quote_with_services() {
        let breakfast = Service::new(ServiceId::from_u128(1), "SRV-1", "Breakfast", "Food", 10.0, true);
        let transfer = Service::new(ServiceId::from_u128(2), "SRV-2", "Transfer", "Transport", 35.0, false);
        let q = quote_stay(80.0, date(2024, 2, 1), date(2024, 2, 3), &[], &[breakfast, transfer]).unwrap();
        assert_eq!(q.services_total, 20.0 + 35.0);
        assert_eq!(q.total, 160.0 + 55.0);
    }

    #[test]
    fn test_quote_rejects_reversed_dates() {
        assert!(quote_stay(80.0, date(2024, 2, 3), date(2024, 2, 3), &[], &[]).is_err());
    }

    #[test]
    fn test_quote_caps_stay_length() {
        let year = quote_stay(10.0, date(2024, 1, 1), date(2024, 12, 31), &[], &[]).unwrap();
        assert_eq!(year.nights, 365);

        let err = quote_stay(10.0, date(2024, 1, 1), date(9999, 12, 31), &[], &[]).unwrap_err();
        assert!(err.contains("365"));
        assert!(quote_stay(10.0, date(2024, 1, 1), date(2025, 1, 1), &[], &[]).is_err());
    }
}
