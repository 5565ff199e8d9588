use contracts::domain::a004_guest::aggregate::{Guest, GuestDto};
use contracts::enums::GuestStatus;
use leptos::prelude::*;

/// Raw form input, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct GuestForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub status: String,
}

impl From<&Guest> for GuestForm {
    fn from(g: &Guest) -> Self {
        Self {
            full_name: g.full_name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
            country: g.country.clone(),
            status: g.status.as_str().to_string(),
        }
    }
}

impl GuestForm {
    pub fn to_dto(&self) -> Result<GuestDto, String> {
        let status = GuestStatus::from_label(&self.status)
            .ok_or_else(|| format!("Unknown status: {}", self.status))?;
        Ok(GuestDto {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            country: self.country.clone(),
            status,
        })
    }

    /// Copy of `original` with the form applied; the original is untouched on error
    pub fn apply_to(&self, original: &Guest) -> Result<Guest, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        Ok(updated)
    }
}

#[derive(Clone, Copy)]
pub struct GuestDetailsViewModel {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub country: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl GuestDetailsViewModel {
    pub fn new(guest: &Guest) -> Self {
        let form = GuestForm::from(guest);
        Self {
            full_name: RwSignal::new(form.full_name),
            email: RwSignal::new(form.email),
            phone: RwSignal::new(form.phone),
            country: RwSignal::new(form.country),
            status: RwSignal::new(form.status),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> GuestForm {
        GuestForm {
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            country: self.country.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn save_command(&self, original: &Guest, on_saved: Callback<Guest>) {
        match self.form().apply_to(original) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("guest {}: {}", original.base.code, e);
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
    fn test_apply_updates_fields() {
        let guest = &fixtures::guests()[3];
        let mut form = GuestForm::from(guest);
        form.status = "active".into();
        form.country = "  Mexico ".into();

        let updated = form.apply_to(guest).unwrap();
        assert_eq!(updated.status, GuestStatus::Active);
        assert_eq!(updated.country, "Mexico");
        assert_eq!(updated.base.metadata.version, guest.base.metadata.version + 1);
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let guest = &fixtures::guests()[0];
        let mut form = GuestForm::from(guest);
        form.email = "not-an-email".into();
        assert!(form.apply_to(guest).unwrap_err().contains("email"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let guest = &fixtures::guests()[0];
        let mut form = GuestForm::from(guest);
        form.status = "VIP".into();
        assert_eq!(form.apply_to(guest).unwrap_err(), "Unknown status: VIP");
    }
}
