use super::view_model::SeasonalPriceDetailsViewModel;
use crate::shared::components::form_fields::{DateField, TextField};
use crate::shared::modal::DetailsModal;
use contracts::domain::a007_seasonal_price::aggregate::SeasonalPrice;
use leptos::prelude::*;

#[component]
pub fn SeasonalPriceDetails(
    season: SeasonalPrice,
    property: String,
    editable: bool,
    on_saved: Callback<SeasonalPrice>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = SeasonalPriceDetailsViewModel::new(&season);
    let title = format!("{} · {}", property, season.season_name);
    let original = StoredValue::new(season);

    let on_save = Callback::new(move |_| original.with_value(|s| vm.save_command(s, on_saved)));

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <TextField label="Season" value=vm.season_name />
            <DateField label="From" value=vm.start_date />
            <DateField label="To" value=vm.end_date />
            <TextField label="Multiplier" value=vm.multiplier placeholder="1.0 = base rate" />
        </DetailsModal>
    }
}
