use crate::shared::components::form_fields::{date_to_input, parse_date, parse_number};
use contracts::domain::a007_seasonal_price::aggregate::{SeasonalPrice, SeasonalPriceDto};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalPriceForm {
    pub season_name: String,
    pub start_date: String,
    pub end_date: String,
    pub multiplier: String,
}

impl From<&SeasonalPrice> for SeasonalPriceForm {
    fn from(s: &SeasonalPrice) -> Self {
        Self {
            season_name: s.season_name.clone(),
            start_date: date_to_input(s.start_date),
            end_date: date_to_input(s.end_date),
            multiplier: s.multiplier.to_string(),
        }
    }
}

impl SeasonalPriceForm {
    pub fn to_dto(&self) -> Result<SeasonalPriceDto, String> {
        Ok(SeasonalPriceDto {
            season_name: self.season_name.clone(),
            start_date: parse_date("From", &self.start_date)?,
            end_date: parse_date("To", &self.end_date)?,
            multiplier: parse_number("Multiplier", &self.multiplier)?,
        })
    }

    pub fn apply_to(&self, original: &SeasonalPrice) -> Result<SeasonalPrice, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        Ok(updated)
    }
}

#[derive(Clone, Copy)]
pub struct SeasonalPriceDetailsViewModel {
    pub season_name: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub multiplier: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl SeasonalPriceDetailsViewModel {
    pub fn new(season: &SeasonalPrice) -> Self {
        let form = SeasonalPriceForm::from(season);
        Self {
            season_name: RwSignal::new(form.season_name),
            start_date: RwSignal::new(form.start_date),
            end_date: RwSignal::new(form.end_date),
            multiplier: RwSignal::new(form.multiplier),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> SeasonalPriceForm {
        SeasonalPriceForm {
            season_name: self.season_name.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            multiplier: self.multiplier.get_untracked(),
        }
    }

    pub fn save_command(&self, original: &SeasonalPrice, on_saved: Callback<SeasonalPrice>) {
        match self.form().apply_to(original) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("season {}: {}", original.base.code, e);
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
    fn test_extend_season() {
        let season = &fixtures::seasonal_prices()[0];
        let mut form = SeasonalPriceForm::from(season);
        assert_eq!(form.start_date, "2024-07-01");
        form.end_date = "2024-09-15".into();
        let updated = form.apply_to(season).unwrap();
        assert!(updated.covers(updated.end_date));
        assert_eq!(date_to_input(updated.end_date), "2024-09-15");
    }

    #[test]
    fn test_reversed_dates_are_rejected() {
        let season = &fixtures::seasonal_prices()[0];
        let mut form = SeasonalPriceForm::from(season);
        form.end_date = "2024-06-01".into();
        assert_eq!(
            form.apply_to(season).unwrap_err(),
            "Season end date must not precede its start date"
        );
    }

    #[test]
    fn test_malformed_date_names_the_field() {
        let season = &fixtures::seasonal_prices()[0];
        let mut form = SeasonalPriceForm::from(season);
        form.start_date = "July".into();
        assert!(form.apply_to(season).unwrap_err().starts_with("From:"));
    }
}
