use contracts::domain::a001_owner::aggregate::{Owner, OwnerDto};
use contracts::enums::OwnerStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: String,
}

impl From<&Owner> for OwnerForm {
    fn from(o: &Owner) -> Self {
        Self {
            full_name: o.full_name.clone(),
            email: o.email.clone(),
            phone: o.phone.clone(),
            company: o.company.clone().unwrap_or_default(),
            status: o.status.as_str().to_string(),
        }
    }
}

impl OwnerForm {
    pub fn to_dto(&self) -> Result<OwnerDto, String> {
        let status = OwnerStatus::from_label(&self.status)
            .ok_or_else(|| format!("Unknown status: {}", self.status))?;
        Ok(OwnerDto {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            // Пустая строка очищает компанию
            company: Some(self.company.clone()),
            status,
        })
    }

    pub fn apply_to(&self, original: &Owner) -> Result<Owner, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        Ok(updated)
    }
}

#[derive(Clone, Copy)]
pub struct OwnerDetailsViewModel {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub company: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl OwnerDetailsViewModel {
    pub fn new(owner: &Owner) -> Self {
        let form = OwnerForm::from(owner);
        Self {
            full_name: RwSignal::new(form.full_name),
            email: RwSignal::new(form.email),
            phone: RwSignal::new(form.phone),
            company: RwSignal::new(form.company),
            status: RwSignal::new(form.status),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> OwnerForm {
        OwnerForm {
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            company: self.company.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn save_command(&self, original: &Owner, on_saved: Callback<Owner>) {
        match self.form().apply_to(original) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("owner {}: {}", original.base.code, e);
                self.error.set(Some(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures;

    #[test]
    fn test_blank_company_clears_it() {
        let owner = &fixtures::owners()[0];
        let mut form = OwnerForm::from(owner);
        assert_eq!(form.company, "Costa Stays SL");
        form.company = "   ".into();
        assert_eq!(form.apply_to(owner).unwrap().company, None);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let owner = &fixtures::owners()[0];
        let mut form = OwnerForm::from(owner);
        form.full_name = " ".into();
        assert!(form.apply_to(owner).is_err());
    }
}
