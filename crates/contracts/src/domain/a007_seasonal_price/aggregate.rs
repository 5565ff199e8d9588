use crate::aggregate_id;
use crate::domain::a002_property::aggregate::PropertyId;
use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

aggregate_id! {
    /// Уникальный идентификатор сезонной цены
    SeasonalPriceId
}

/// Сезонный коэффициент к базовой цене объекта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalPrice {
    #[serde(flatten)]
    pub base: BaseAggregate<SeasonalPriceId>,

    #[serde(rename = "propertyId")]
    pub property_id: PropertyId,
    #[serde(rename = "seasonName")]
    pub season_name: String,
    /// Первый день сезона (включительно)
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    /// Последний день сезона (включительно)
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    pub multiplier: f64,
}

impl SeasonalPrice {
    pub fn new(
        id: SeasonalPriceId,
        property_id: PropertyId,
        season_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        multiplier: f64,
    ) -> Self {
        let season_name = season_name.into();
        Self {
            base: BaseAggregate::new(
                id,
                format!("SEA-{}", start_date.format("%Y%m%d")),
                season_name.clone(),
            ),
            property_id,
            season_name,
            start_date,
            end_date,
            multiplier,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Дата попадает в сезон
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn update(&mut self, dto: &SeasonalPriceDto) {
        self.season_name = dto.season_name.trim().to_string();
        self.base.description = self.season_name.clone();
        self.start_date = dto.start_date;
        self.end_date = dto.end_date;
        self.multiplier = dto.multiplier;
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.season_name.trim().is_empty() {
            return Err("Season name must not be empty".into());
        }
        if self.end_date < self.start_date {
            return Err("Season end date must not precede its start date".into());
        }
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err("Multiplier must be greater than zero".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalPriceDto {
    pub season_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: f64,
}

impl From<&SeasonalPrice> for SeasonalPriceDto {
    fn from(s: &SeasonalPrice) -> Self {
        Self {
            season_name: s.season_name.clone(),
            start_date: s.start_date,
            end_date: s.end_date,
            multiplier: s.multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summer() -> SeasonalPrice {
        SeasonalPrice::new(
            SeasonalPriceId::from_u128(1),
            PropertyId::from_u128(1),
            "Summer",
            date(2024, 6, 1),
            date(2024, 8, 31),
            1.3,
        )
    }

    #[test]
    fn test_covers_is_inclusive() {
        let s = summer();
        assert!(s.covers(date(2024, 6, 1)));
        assert!(s.covers(date(2024, 8, 31)));
        assert!(!s.covers(date(2024, 9, 1)));
        assert!(!s.covers(date(2024, 5, 31)));
    }

    #[test]
    fn test_validate_date_order_and_multiplier() {
        let mut s = summer();
        assert!(s.validate().is_ok());
        s.multiplier = 0.0;
        assert!(s.validate().is_err());
        s.multiplier = 1.1;
        s.end_date = date(2024, 5, 1);
        assert!(s.validate().unwrap_err().contains("end date"));
    }

    #[test]
    fn test_code_is_derived_from_start_date() {
        assert_eq!(summer().base.code, "SEA-20240601");
    }
}
