use super::view_model::RoomDetailsViewModel;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::modal::DetailsModal;
use contracts::domain::a003_room::aggregate::Room;
use contracts::enums::{RoomStatus, RoomType};
use leptos::prelude::*;

#[component]
pub fn RoomDetails(
    room: Room,
    property: String,
    editable: bool,
    on_saved: Callback<Room>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = RoomDetailsViewModel::new(&room);
    let title = format!("{} · Room {}", property, room.number);
    let original = StoredValue::new(room);

    let on_save = Callback::new(move |_| original.with_value(|r| vm.save_command(r, on_saved)));

    view! {
        <DetailsModal title=title editable=editable error=vm.error on_save=on_save on_close=on_close>
            <TextField label="Number" value=vm.number />
            <SelectField label="Type" value=vm.room_type options=RoomType::labels() />
            <TextField label="Capacity" value=vm.capacity />
            <TextField label="Nightly rate" value=vm.nightly_rate />
            <SelectField label="Status" value=vm.status options=RoomStatus::labels() />
        </DetailsModal>
    }
}
