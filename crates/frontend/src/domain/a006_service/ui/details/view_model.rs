use crate::shared::components::form_fields::parse_number;
use contracts::domain::a006_service::aggregate::{Service, ServiceDto};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub per_night: bool,
    pub is_active: bool,
}

impl From<&Service> for ServiceForm {
    fn from(s: &Service) -> Self {
        Self {
            name: s.name.clone(),
            category: s.category.clone(),
            price: s.price.to_string(),
            per_night: s.per_night,
            is_active: s.is_active,
        }
    }
}

impl ServiceForm {
    pub fn to_dto(&self) -> Result<ServiceDto, String> {
        Ok(ServiceDto {
            name: self.name.clone(),
            category: self.category.clone(),
            price: parse_number("Price", &self.price)?,
            per_night: self.per_night,
            is_active: self.is_active,
        })
    }

    pub fn apply_to(&self, original: &Service) -> Result<Service, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        Ok(updated)
    }
}

#[derive(Clone, Copy)]
pub struct ServiceDetailsViewModel {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub per_night: RwSignal<bool>,
    pub is_active: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ServiceDetailsViewModel {
    pub fn new(service: &Service) -> Self {
        let form = ServiceForm::from(service);
        Self {
            name: RwSignal::new(form.name),
            category: RwSignal::new(form.category),
            price: RwSignal::new(form.price),
            per_night: RwSignal::new(form.per_night),
            is_active: RwSignal::new(form.is_active),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> ServiceForm {
        ServiceForm {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            price: self.price.get_untracked(),
            per_night: self.per_night.get_untracked(),
            is_active: self.is_active.get_untracked(),
        }
    }

    pub fn save_command(&self, original: &Service, on_saved: Callback<Service>) {
        match self.form().apply_to(original) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("service {}: {}", original.base.code, e);
                self.error.set(Some(e));
            }
        }
    }
}
