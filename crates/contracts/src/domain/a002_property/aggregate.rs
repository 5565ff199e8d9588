use crate::aggregate_id;
use crate::domain::a001_owner::aggregate::OwnerId;
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::{PropertyStatus, PropertyType};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id! {
    /// Уникальный идентификатор объекта размещения
    PropertyId
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Объект размещения (отель, вилла, апартаменты)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub base: BaseAggregate<PropertyId>,

    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    #[serde(rename = "ownerId")]
    pub owner_id: OwnerId,
    /// Рейтинг 0..=5
    pub rating: f64,
    /// Базовая цена за ночь
    #[serde(rename = "baseRate")]
    pub base_rate: f64,
    pub status: PropertyStatus,
}

impl Property {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PropertyId,
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        property_type: PropertyType,
        owner_id: OwnerId,
        base_rate: f64,
    ) -> Self {
        let name = name.into();
        Self {
            base: BaseAggregate::new(id, code, name.clone()),
            name,
            city: city.into(),
            country: country.into(),
            property_type,
            owner_id,
            rating: 0.0,
            base_rate,
            status: PropertyStatus::Active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &PropertyDto) {
        self.name = dto.name.trim().to_string();
        self.base.description = self.name.clone();
        self.city = dto.city.trim().to_string();
        self.country = dto.country.trim().to_string();
        self.property_type = dto.property_type;
        self.rating = dto.rating;
        self.base_rate = dto.base_rate;
        self.status = dto.status;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.name.trim().is_empty() {
            return Err("Property name must not be empty".into());
        }
        if self.city.trim().is_empty() {
            return Err("City must not be empty".into());
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!("Rating must be between 0 and 5, got {}", self.rating));
        }
        if !self.base_rate.is_finite() || self.base_rate <= 0.0 {
            return Err("Base rate must be a positive amount".into());
        }
        Ok(())
    }
}

/// DTO для формы редактирования объекта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDto {
    pub name: String,
    pub city: String,
    pub country: String,
    pub property_type: PropertyType,
    pub rating: f64,
    pub base_rate: f64,
    pub status: PropertyStatus,
}

impl From<&Property> for PropertyDto {
    fn from(p: &Property) -> Self {
        Self {
            name: p.name.clone(),
            city: p.city.clone(),
            country: p.country.clone(),
            property_type: p.property_type,
            rating: p.rating,
            base_rate: p.base_rate,
            status: p.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property() -> Property {
        Property::new(
            PropertyId::from_u128(1),
            "PRP-001",
            "Grand Hotel",
            "Paris",
            "France",
            PropertyType::Hotel,
            OwnerId::from_u128(1),
            180.0,
        )
    }

    #[test]
    fn test_validate_rating_range() {
        let mut p = property();
        p.rating = 4.5;
        assert!(p.validate().is_ok());
        p.rating = 5.5;
        assert!(p.validate().unwrap_err().contains("Rating"));
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        let mut p = property();
        p.base_rate = 0.0;
        assert!(p.validate().is_err());
        p.base_rate = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_update_from_dto() {
        let mut p = property();
        let mut dto = PropertyDto::from(&p);
        dto.name = "Grand Hotel Opera".into();
        dto.status = PropertyStatus::Maintenance;
        p.update(&dto);
        assert_eq!(p.base.description, "Grand Hotel Opera");
        assert_eq!(p.status, PropertyStatus::Maintenance);
    }
}
