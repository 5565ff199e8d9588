use crate::aggregate_id;
use crate::domain::a002_property::aggregate::PropertyId;
use crate::domain::a003_room::aggregate::RoomId;
use crate::domain::a004_guest::aggregate::GuestId;
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::BookingStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id! {
    /// Уникальный идентификатор бронирования
    BookingId
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Бронирование номера гостем
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(flatten)]
    pub base: BaseAggregate<BookingId>,

    #[serde(rename = "guestId")]
    pub guest_id: GuestId,
    #[serde(rename = "propertyId")]
    pub property_id: PropertyId,
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
    #[serde(rename = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(rename = "checkOut")]
    pub check_out: NaiveDate,
    pub guests: u32,
    /// Итоговая сумма брони
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    pub status: BookingStatus,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookingId,
        code: impl Into<String>,
        guest_id: GuestId,
        property_id: PropertyId,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        total_amount: f64,
    ) -> Self {
        let code = code.into();
        Self {
            base: BaseAggregate::new(id, code.clone(), format!("Booking {}", code)),
            guest_id,
            property_id,
            room_id,
            check_in,
            check_out,
            guests,
            total_amount,
            status: BookingStatus::Pending,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Количество ночей (0, если даты перепутаны)
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(0)
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &BookingDto) {
        self.check_in = dto.check_in;
        self.check_out = dto.check_out;
        self.guests = dto.guests;
        self.total_amount = dto.total_amount;
        self.status = dto.status;
        self.base.touch();
    }

    /// Отменить бронь
    pub fn cancel(&mut self) -> Result<(), String> {
        if !self.status.is_open() {
            return Err(format!("Booking in status '{}' cannot be cancelled", self.status));
        }
        self.status = BookingStatus::Cancelled;
        self.base.touch();
        Ok(())
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.check_out <= self.check_in {
            return Err("Check-out must be after check-in".into());
        }
        if self.guests == 0 {
            return Err("Booking must have at least one guest".into());
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err("Total amount must not be negative".into());
        }
        Ok(())
    }
}

/// DTO для формы редактирования брони
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            check_in: b.check_in,
            check_out: b.check_out,
            guests: b.guests,
            total_amount: b.total_amount,
            status: b.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking() -> Booking {
        Booking::new(
            BookingId::from_u128(1),
            "BK-0001",
            GuestId::from_u128(1),
            PropertyId::from_u128(1),
            RoomId::from_u128(1),
            date(2024, 7, 10),
            date(2024, 7, 14),
            2,
            720.0,
        )
    }

    #[test]
    fn test_nights() {
        assert_eq!(booking().nights(), 4);
        let mut b = booking();
        b.check_out = date(2024, 7, 1);
        assert_eq!(b.nights(), 0);
    }

    #[test]
    fn test_validate_dates_and_guests() {
        let mut b = booking();
        assert!(b.validate().is_ok());
        b.check_out = b.check_in;
        assert_eq!(b.validate().unwrap_err(), "Check-out must be after check-in");
        b.check_out = date(2024, 7, 12);
        b.guests = 0;
        assert!(b.validate().is_err());
    }

    #[test]
    fn test_cancel_only_open_bookings() {
        let mut b = booking();
        assert!(b.cancel().is_ok());
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert!(b.cancel().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case_fields() {
        let json = serde_json::to_value(booking()).unwrap();
        assert_eq!(json["checkIn"], "2024-07-10");
        assert_eq!(json["code"], "BK-0001");
        assert_eq!(json["status"], "Pending");
    }
}
