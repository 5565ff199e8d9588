use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Бизнес-код записи (например, "BK-2024-001", "GST-0042")
    pub code: String,
    /// Описание/название записи
    pub description: String,
    /// Комментарий
    pub comment: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            description: description.into(),
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Пометить запись удалённой
    pub fn mark_deleted(&mut self) {
        self.metadata.is_deleted = true;
        self.metadata.touch();
    }

    /// Общая валидация кода и описания
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        if self.description.trim().is_empty() {
            return Err("Description must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_bumps_version() {
        let mut base = BaseAggregate::new(1u32, "C-1", "Test");
        base.touch();
        base.touch();
        assert_eq!(base.metadata.version, 2);
    }

    #[test]
    fn test_validate_requires_code_and_description() {
        assert!(BaseAggregate::new(1u32, " ", "x").validate().is_err());
        assert!(BaseAggregate::new(1u32, "C", "").validate().is_err());
        assert!(BaseAggregate::new(1u32, "C", "x").validate().is_ok());
    }

    #[test]
    fn test_mark_deleted() {
        let mut base = BaseAggregate::new(1u32, "C", "x");
        base.mark_deleted();
        assert!(base.metadata.is_deleted);
    }
}
