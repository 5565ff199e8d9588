use super::view_model::OwnerDetailsViewModel;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::modal::DetailsModal;
use contracts::domain::a001_owner::aggregate::Owner;
use contracts::enums::OwnerStatus;
use leptos::prelude::*;

#[component]
pub fn OwnerDetails(
    owner: Owner,
    editable: bool,
    on_saved: Callback<Owner>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = OwnerDetailsViewModel::new(&owner);
    let title = format!("{} · {}", owner.base.code, owner.full_name);
    let original = StoredValue::new(owner);

    let on_save = Callback::new(move |_| original.with_value(|o| vm.save_command(o, on_saved)));

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <TextField label="Full name" value=vm.full_name />
            <TextField label="Email" value=vm.email placeholder="name@example.com" />
            <TextField label="Phone" value=vm.phone />
            <TextField label="Company" value=vm.company placeholder="Private owner" />
            <SelectField label="Status" value=vm.status options=OwnerStatus::labels() />
        </DetailsModal>
    }
}
