use super::view_model::GuestDetailsViewModel;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::modal::DetailsModal;
use contracts::domain::a004_guest::aggregate::Guest;
use contracts::enums::GuestStatus;
use leptos::prelude::*;

#[component]
pub fn GuestDetails(
    guest: Guest,
    editable: bool,
    on_saved: Callback<Guest>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = GuestDetailsViewModel::new(&guest);
    let title = format!("{} · {}", guest.base.code, guest.full_name);
    let original = StoredValue::new(guest);

    let on_save = Callback::new(move |_| original.with_value(|g| vm.save_command(g, on_saved)));

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <TextField label="Full name" value=vm.full_name />
            <TextField label="Email" value=vm.email placeholder="name@example.com" />
            <TextField label="Phone" value=vm.phone />
            <TextField label="Country" value=vm.country />
            <SelectField label="Status" value=vm.status options=GuestStatus::labels() />
            <p class="details-form__hint">
                {move || original.with_value(|g| format!("Completed stays: {}", g.total_stays))}
            </p>
        </DetailsModal>
    }
}
