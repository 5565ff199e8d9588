use super::view_model::ServiceDetailsViewModel;
use crate::shared::components::form_fields::{CheckField, TextField};
use crate::shared::modal::DetailsModal;
use contracts::domain::a006_service::aggregate::Service;
use leptos::prelude::*;

#[component]
pub fn ServiceDetails(
    service: Service,
    editable: bool,
    on_saved: Callback<Service>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ServiceDetailsViewModel::new(&service);
    let title = format!("{} · {}", service.base.code, service.name);
    let original = StoredValue::new(service);

    let on_save = Callback::new(move |_| original.with_value(|s| vm.save_command(s, on_saved)));

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <TextField label="Name" value=vm.name />
            <TextField label="Category" value=vm.category />
            <TextField label="Price" value=vm.price />
            <CheckField label="Charged per night" value=vm.per_night />
            <CheckField label="Active" value=vm.is_active />
        </DetailsModal>
    }
}
