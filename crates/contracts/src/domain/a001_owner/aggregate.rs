use crate::aggregate_id;
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::OwnerStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id! {
    /// Уникальный идентификатор владельца
    OwnerId
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Владелец объектов размещения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    #[serde(flatten)]
    pub base: BaseAggregate<OwnerId>,

    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    #[serde(rename = "propertiesCount")]
    pub properties_count: u32,
    pub status: OwnerStatus,
}

impl Owner {
    pub fn new(
        id: OwnerId,
        code: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        let full_name = full_name.into();
        Self {
            base: BaseAggregate::new(id, code, full_name.clone()),
            full_name,
            email: email.into(),
            phone: phone.into(),
            company: None,
            properties_count: 0,
            status: OwnerStatus::Active,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &OwnerDto) {
        self.full_name = dto.full_name.trim().to_string();
        self.base.description = self.full_name.clone();
        self.email = dto.email.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.company = dto
            .company
            .as_ref()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self.status = dto.status;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.full_name.trim().is_empty() {
            return Err("Owner name must not be empty".into());
        }
        if !crate::domain::is_plausible_email(&self.email) {
            return Err(format!("Invalid email: {}", self.email));
        }
        Ok(())
    }
}

/// DTO для формы редактирования владельца
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub status: OwnerStatus,
}

impl From<&Owner> for OwnerDto {
    fn from(o: &Owner) -> Self {
        Self {
            full_name: o.full_name.clone(),
            email: o.email.clone(),
            phone: o.phone.clone(),
            company: o.company.clone(),
            status: o.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner::new(OwnerId::from_u128(1), "OWN-001", "Maria Lopez", "maria@example.com", "+34 600 000 001")
    }

    #[test]
    fn test_update_trims_and_drops_empty_company() {
        let mut o = owner();
        let mut dto = OwnerDto::from(&o);
        dto.full_name = "  Maria L. Lopez ".into();
        dto.company = Some("   ".into());
        dto.status = OwnerStatus::Inactive;
        o.update(&dto);

        assert_eq!(o.full_name, "Maria L. Lopez");
        assert_eq!(o.base.description, "Maria L. Lopez");
        assert_eq!(o.company, None);
        assert_eq!(o.status, OwnerStatus::Inactive);
        assert_eq!(o.base.metadata.version, 1);
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut o = owner();
        assert!(o.validate().is_ok());
        o.email = "maria-at-example".into();
        assert!(o.validate().unwrap_err().contains("Invalid email"));
    }
}
