use crate::shared::components::form_fields::parse_number;
use contracts::domain::a002_property::aggregate::{Property, PropertyDto};
use contracts::enums::{PropertyStatus, PropertyType};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub name: String,
    pub city: String,
    pub country: String,
    pub property_type: String,
    pub rating: String,
    pub base_rate: String,
    pub status: String,
}

impl From<&Property> for PropertyForm {
    fn from(p: &Property) -> Self {
        Self {
            name: p.name.clone(),
            city: p.city.clone(),
            country: p.country.clone(),
            property_type: p.property_type.as_str().to_string(),
            rating: p.rating.to_string(),
            base_rate: p.base_rate.to_string(),
            status: p.status.as_str().to_string(),
        }
    }
}

impl PropertyForm {
    pub fn to_dto(&self) -> Result<PropertyDto, String> {
        let property_type = PropertyType::from_label(&self.property_type)
            .ok_or_else(|| format!("Unknown property type: {}", self.property_type))?;
        let status = PropertyStatus::from_label(&self.status)
            .ok_or_else(|| format!("Unknown status: {}", self.status))?;
        Ok(PropertyDto {
            name: self.name.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            property_type,
            rating: parse_number("Rating", &self.rating)?,
            base_rate: parse_number("Base rate", &self.base_rate)?,
            status,
        })
    }

    pub fn apply_to(&self, original: &Property) -> Result<Property, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        Ok(updated)
    }
}

#[derive(Clone, Copy)]
pub struct PropertyDetailsViewModel {
    pub name: RwSignal<String>,
    pub city: RwSignal<String>,
    pub country: RwSignal<String>,
    pub property_type: RwSignal<String>,
    pub rating: RwSignal<String>,
    pub base_rate: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl PropertyDetailsViewModel {
    pub fn new(property: &Property) -> Self {
        let form = PropertyForm::from(property);
        Self {
            name: RwSignal::new(form.name),
            city: RwSignal::new(form.city),
            country: RwSignal::new(form.country),
            property_type: RwSignal::new(form.property_type),
            rating: RwSignal::new(form.rating),
            base_rate: RwSignal::new(form.base_rate),
            status: RwSignal::new(form.status),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> PropertyForm {
        PropertyForm {
            name: self.name.get_untracked(),
            city: self.city.get_untracked(),
            country: self.country.get_untracked(),
            property_type: self.property_type.get_untracked(),
            rating: self.rating.get_untracked(),
            base_rate: self.base_rate.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn save_command(&self, original: &Property, on_saved: Callback<Property>) {
        match self.form().apply_to(original) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("property {}: {}", original.base.code, e);
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
    fn test_form_round_trips_numbers() {
        let property = &fixtures::properties()[0];
        let form = PropertyForm::from(property);
        assert_eq!(form.rating, "4.6");
        assert_eq!(form.base_rate, "240");
        let updated = form.apply_to(property).unwrap();
        assert_eq!(updated.base_rate, 240.0);
        assert_eq!(updated.property_type, PropertyType::Hotel);
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let property = &fixtures::properties()[0];
        let mut form = PropertyForm::from(property);
        form.rating = "7".into();
        assert!(form.apply_to(property).unwrap_err().contains("between 0 and 5"));
    }

    #[test]
    fn test_non_numeric_rate_names_the_field() {
        let property = &fixtures::properties()[0];
        let mut form = PropertyForm::from(property);
        form.base_rate = "cheap".into();
        assert_eq!(
            form.apply_to(property).unwrap_err(),
            "Base rate: 'cheap' is not a number"
        );
    }
}
