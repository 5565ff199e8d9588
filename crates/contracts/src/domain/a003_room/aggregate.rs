use crate::aggregate_id;
use crate::domain::a002_property::aggregate::PropertyId;
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::{RoomStatus, RoomType};
use serde::{Deserialize, Serialize};

aggregate_id! {
    /// Уникальный идентификатор номера
    RoomId
}

/// Номер в объекте размещения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(flatten)]
    pub base: BaseAggregate<RoomId>,

    #[serde(rename = "propertyId")]
    pub property_id: PropertyId,
    pub number: String,
    #[serde(rename = "roomType")]
    pub room_type: RoomType,
    /// Максимальное число гостей
    pub capacity: u32,
    #[serde(rename = "nightlyRate")]
    pub nightly_rate: f64,
    pub status: RoomStatus,
}

impl Room {
    pub fn new(
        id: RoomId,
        property_id: PropertyId,
        number: impl Into<String>,
        room_type: RoomType,
        capacity: u32,
        nightly_rate: f64,
    ) -> Self {
        let number = number.into();
        Self {
            base: BaseAggregate::new(id, format!("RM-{}", number), format!("Room {}", number)),
            property_id,
            number,
            room_type,
            capacity,
            nightly_rate,
            status: RoomStatus::Available,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &RoomDto) {
        self.number = dto.number.trim().to_string();
        self.base.description = format!("Room {}", self.number);
        self.room_type = dto.room_type;
        self.capacity = dto.capacity;
        self.nightly_rate = dto.nightly_rate;
        self.status = dto.status;
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.number.trim().is_empty() {
            return Err("Room number must not be empty".into());
        }
        if self.capacity == 0 {
            return Err("Room capacity must be at least 1".into());
        }
        if !self.nightly_rate.is_finite() || self.nightly_rate <= 0.0 {
            return Err("Nightly rate must be a positive amount".into());
        }
        Ok(())
    }

    /// Номер вмещает указанное число гостей
    pub fn fits(&self, guests: u32) -> bool {
        guests > 0 && guests <= self.capacity
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub number: String,
    pub room_type: RoomType,
    pub capacity: u32,
    pub nightly_rate: f64,
    pub status: RoomStatus,
}

impl From<&Room> for RoomDto {
    fn from(r: &Room) -> Self {
        Self {
            number: r.number.clone(),
            room_type: r.room_type,
            capacity: r.capacity,
            nightly_rate: r.nightly_rate,
            status: r.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(RoomId::from_u128(1), PropertyId::from_u128(1), "101", RoomType::Deluxe, 2, 150.0)
    }

    #[test]
    fn test_fits() {
        let r = room();
        assert!(r.fits(1));
        assert!(r.fits(2));
        assert!(!r.fits(3));
        assert!(!r.fits(0));
    }

    #[test]
    fn test_validate_capacity() {
        let mut r = room();
        r.capacity = 0;
        assert!(r.validate().unwrap_err().contains("capacity"));
    }
}
