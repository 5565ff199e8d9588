use crate::shared::components::form_fields::{parse_count, parse_number};
use contracts::domain::a003_room::aggregate::{Room, RoomDto};
use contracts::enums::{RoomStatus, RoomType};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RoomForm {
    pub number: String,
    pub room_type: String,
    pub capacity: String,
    pub nightly_rate: String,
    pub status: String,
}

impl From<&Room> for RoomForm {
    fn from(r: &Room) -> Self {
        Self {
            number: r.number.clone(),
            room_type: r.room_type.as_str().to_string(),
            capacity: r.capacity.to_string(),
            nightly_rate: r.nightly_rate.to_string(),
            status: r.status.as_str().to_string(),
        }
    }
}

impl RoomForm {
    pub fn to_dto(&self) -> Result<RoomDto, String> {
        let room_type = RoomType::from_label(&self.room_type)
            .ok_or_else(|| format!("Unknown room type: {}", self.room_type))?;
        let status = RoomStatus::from_label(&self.status)
            .ok_or_else(|| format!("Unknown status: {}", self.status))?;
        Ok(RoomDto {
            number: self.number.clone(),
            room_type,
            capacity: parse_count("Capacity", &self.capacity)?,
            nightly_rate: parse_number("Nightly rate", &self.nightly_rate)?,
            status,
        })
    }

    pub fn apply_to(&self, original: &Room) -> Result<Room, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        Ok(updated)
    }
}

#[derive(Clone, Copy)]
pub struct RoomDetailsViewModel {
    pub number: RwSignal<String>,
    pub room_type: RwSignal<String>,
    pub capacity: RwSignal<String>,
    pub nightly_rate: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl RoomDetailsViewModel {
    pub fn new(room: &Room) -> Self {
        let form = RoomForm::from(room);
        Self {
            number: RwSignal::new(form.number),
            room_type: RwSignal::new(form.room_type),
            capacity: RwSignal::new(form.capacity),
            nightly_rate: RwSignal::new(form.nightly_rate),
            status: RwSignal::new(form.status),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> RoomForm {
        RoomForm {
            number: self.number.get_untracked(),
            room_type: self.room_type.get_untracked(),
            capacity: self.capacity.get_untracked(),
            nightly_rate: self.nightly_rate.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn save_command(&self, original: &Room, on_saved: Callback<Room>) {
        match self.form().apply_to(original) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("room {}: {}", original.base.code, e);
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
    fn test_apply_changes_type_and_capacity() {
        let room = &fixtures::rooms()[0];
        let mut form = RoomForm::from(room);
        form.room_type = "deluxe".into();
        form.capacity = "3".into();
        let updated = form.apply_to(room).unwrap();
        assert_eq!(updated.room_type, RoomType::Deluxe);
        assert!(updated.fits(3));
        assert_eq!(updated.base.description, "Room 101");
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let room = &fixtures::rooms()[0];
        let mut form = RoomForm::from(room);
        form.capacity = "0".into();
        assert_eq!(form.apply_to(room).unwrap_err(), "Room capacity must be at least 1");
    }
}
