use crate::aggregate_id;
use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};

aggregate_id! {
    /// Уникальный идентификатор услуги
    ServiceId
}

/// Дополнительная услуга (завтрак, трансфер, спа)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten)]
    pub base: BaseAggregate<ServiceId>,

    pub name: String,
    pub category: String,
    pub price: f64,
    /// Цена начисляется за каждую ночь, а не разово
    #[serde(rename = "perNight")]
    pub per_night: bool,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Service {
    pub fn new(
        id: ServiceId,
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        per_night: bool,
    ) -> Self {
        let name = name.into();
        Self {
            base: BaseAggregate::new(id, code, name.clone()),
            name,
            category: category.into(),
            price,
            per_night,
            is_active: true,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ServiceDto) {
        self.name = dto.name.trim().to_string();
        self.base.description = self.name.clone();
        self.category = dto.category.trim().to_string();
        self.price = dto.price;
        self.per_night = dto.per_night;
        self.is_active = dto.is_active;
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.name.trim().is_empty() {
            return Err("Service name must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Service price must not be negative".into());
        }
        Ok(())
    }

    /// Стоимость услуги за проживание указанной длительности
    pub fn charge_for(&self, nights: u32) -> f64 {
        if self.per_night {
            self.price * f64::from(nights)
        } else {
            self.price
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDto {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub per_night: bool,
    pub is_active: bool,
}

impl From<&Service> for ServiceDto {
    fn from(s: &Service) -> Self {
        Self {
            name: s.name.clone(),
            category: s.category.clone(),
            price: s.price,
            per_night: s.per_night,
            is_active: s.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_for() {
        let breakfast = Service::new(ServiceId::from_u128(1), "SRV-1", "Breakfast", "Food", 15.0, true);
        let transfer = Service::new(ServiceId::from_u128(2), "SRV-2", "Airport transfer", "Transport", 40.0, false);
        assert_eq!(breakfast.charge_for(3), 45.0);
        assert_eq!(transfer.charge_for(3), 40.0);
    }

    #[test]
    fn test_negative_price_is_invalid() {
        let mut s = Service::new(ServiceId::from_u128(1), "SRV-1", "Spa", "Wellness", 50.0, false);
        s.price = -1.0;
        assert!(s.validate().is_err());
    }
}
