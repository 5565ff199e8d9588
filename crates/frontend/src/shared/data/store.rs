//! In-memory collections of the admin console.
//!
//! Seeded from fixtures and provided through context, so edits survive
//! switching between sections. Pages read and mutate these signals; the
//! table only ever receives snapshots.

use contracts::domain::a001_owner::aggregate::{Owner, OwnerId};
use contracts::domain::a002_property::aggregate::{Property, PropertyId};
use contracts::domain::a003_room::aggregate::{Room, RoomId};
use contracts::domain::a004_guest::aggregate::{Guest, GuestId};
use contracts::domain::a005_booking::aggregate::Booking;
use contracts::domain::a006_service::aggregate::Service;
use contracts::domain::a007_seasonal_price::aggregate::SeasonalPrice;
use contracts::fixtures;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct HotelStore {
    pub owners: RwSignal<Vec<Owner>>,
    pub properties: RwSignal<Vec<Property>>,
    pub rooms: RwSignal<Vec<Room>>,
    pub guests: RwSignal<Vec<Guest>>,
    pub bookings: RwSignal<Vec<Booking>>,
    pub services: RwSignal<Vec<Service>>,
    pub seasonal_prices: RwSignal<Vec<SeasonalPrice>>,
}

impl HotelStore {
    pub fn new() -> Self {
        Self {
            owners: RwSignal::new(fixtures::owners()),
            properties: RwSignal::new(fixtures::properties()),
            rooms: RwSignal::new(fixtures::rooms()),
            guests: RwSignal::new(fixtures::guests()),
            bookings: RwSignal::new(fixtures::bookings()),
            services: RwSignal::new(fixtures::services()),
            seasonal_prices: RwSignal::new(fixtures::seasonal_prices()),
        }
    }

    pub fn owner_name(&self, id: OwnerId) -> String {
        self.owners.with(|v| owner_name(v, id))
    }

    pub fn property_name(&self, id: PropertyId) -> String {
        self.properties.with(|v| property_name(v, id))
    }

    pub fn room_number(&self, id: RoomId) -> String {
        self.rooms.with(|v| room_number(v, id))
    }

    pub fn guest_name(&self, id: GuestId) -> String {
        self.guests.with(|v| guest_name(v, id))
    }
}

impl Default for HotelStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> HotelStore {
    use_context::<HotelStore>().expect("HotelStore not provided in context")
}

/// Удаляет запись по ключу; возвращает true, если что-то удалено
pub fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !pred(item));
    items.len() != before
}

/// Заменяет запись с тем же ключом; возвращает true, если запись найдена
pub fn replace_where<T>(items: &mut [T], updated: T, pred: impl Fn(&T) -> bool) -> bool {
    match items.iter_mut().find(|item| pred(item)) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

// Lookups fall back to a dash so a dangling reference renders, never fails

fn owner_name(owners: &[Owner], id: OwnerId) -> String {
    owners
        .iter()
        .find(|o| o.base.id == id)
        .map(|o| o.full_name.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn property_name(properties: &[Property], id: PropertyId) -> String {
    properties
        .iter()
        .find(|p| p.base.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn room_number(rooms: &[Room], id: RoomId) -> String {
    rooms
        .iter()
        .find(|r| r.base.id == id)
        .map(|r| r.number.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn guest_name(guests: &[Guest], id: GuestId) -> String {
    guests
        .iter()
        .find(|g| g.base.id == id)
        .map(|g| g.full_name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_resolve_fixture_references() {
        let f = fixtures::fixtures();
        let booking = &f.bookings[0];
        assert_eq!(guest_name(&f.guests, booking.guest_id), "Emma Schneider");
        assert_eq!(property_name(&f.properties, booking.property_id), "Grand Hotel");
        assert_eq!(room_number(&f.rooms, booking.room_id), "101");
        assert_eq!(owner_name(&f.owners, f.properties[0].owner_id), "Pierre Martin");
    }

    #[test]
    fn test_dangling_reference_renders_dash() {
        let f = fixtures::fixtures();
        assert_eq!(guest_name(&f.guests, GuestId::from_u128(999)), "-");
    }

    #[test]
    fn test_remove_and_replace_where() {
        let mut v = vec![1, 2, 3, 2];
        assert!(remove_where(&mut v, |x| *x == 2));
        assert_eq!(v, vec![1, 3]);
        assert!(!remove_where(&mut v, |x| *x == 9));

        assert!(replace_where(&mut v, 30, |x| *x == 3));
        assert_eq!(v, vec![1, 30]);
        assert!(!replace_where(&mut v, 0, |x| *x == 7));
    }
}
