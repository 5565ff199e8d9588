use super::view_model::PropertyDetailsViewModel;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::modal::DetailsModal;
use contracts::domain::a002_property::aggregate::Property;
use contracts::enums::{PropertyStatus, PropertyType};
use leptos::prelude::*;

#[component]
pub fn PropertyDetails(
    property: Property,
    /// Имя владельца для отображения
    owner: String,
    editable: bool,
    on_saved: Callback<Property>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = PropertyDetailsViewModel::new(&property);
    let title = format!("{} · {}", property.base.code, property.name);
    let original = StoredValue::new(property);

    let on_save = Callback::new(move |_| original.with_value(|p| vm.save_command(p, on_saved)));

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <TextField label="Name" value=vm.name />
            <TextField label="City" value=vm.city />
            <TextField label="Country" value=vm.country />
            <SelectField label="Type" value=vm.property_type options=PropertyType::labels() />
            <TextField label="Rating (0-5)" value=vm.rating />
            <TextField label="Base rate" value=vm.base_rate />
            <SelectField label="Status" value=vm.status options=PropertyStatus::labels() />
            <p class="details-form__hint">{format!("Owner: {}", owner)}</p>
        </DetailsModal>
    }
}
