use crate::aggregate_id;
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::GuestStatus;
use serde::{Deserialize, Serialize};

aggregate_id! {
    /// Уникальный идентификатор гостя
    GuestId
}

/// Гость (клиент, оформляющий бронирования)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    #[serde(flatten)]
    pub base: BaseAggregate<GuestId>,

    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    #[serde(rename = "totalStays")]
    pub total_stays: u32,
    pub status: GuestStatus,
}

impl Guest {
    pub fn new(
        id: GuestId,
        code: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let full_name = full_name.into();
        Self {
            base: BaseAggregate::new(id, code, full_name.clone()),
            full_name,
            email: email.into(),
            phone: String::new(),
            country: country.into(),
            total_stays: 0,
            status: GuestStatus::Active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &GuestDto) {
        self.full_name = dto.full_name.trim().to_string();
        self.base.description = self.full_name.clone();
        self.email = dto.email.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.country = dto.country.trim().to_string();
        self.status = dto.status;
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.full_name.trim().is_empty() {
            return Err("Guest name must not be empty".into());
        }
        if !crate::domain::is_plausible_email(&self.email) {
            return Err(format!("Invalid email: {}", self.email));
        }
        Ok(())
    }

    /// Заблокированный гость не может оформлять новые брони
    pub fn can_book(&self) -> bool {
        self.status == GuestStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub status: GuestStatus,
}

impl From<&Guest> for GuestDto {
    fn from(g: &Guest) -> Self {
        Self {
            full_name: g.full_name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
            country: g.country.clone(),
            status: g.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_guest_cannot_book() {
        let mut g = Guest::new(GuestId::from_u128(7), "GST-0007", "Jean Dupont", "jean@example.fr", "France");
        assert!(g.can_book());
        let mut dto = GuestDto::from(&g);
        dto.status = GuestStatus::Blocked;
        g.update(&dto);
        assert!(!g.can_book());
    }
}
