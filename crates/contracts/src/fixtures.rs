//! Статические тестовые коллекции для консоли администратора.
//!
//! Идентификаторы строятся через `from_u128`, поэтому ссылки между
//! коллекциями стабильны между запусками.

use crate::domain::a001_owner::aggregate::{Owner, OwnerId};
use crate::domain::a002_property::aggregate::{Property, PropertyId};
use crate::domain::a003_room::aggregate::{Room, RoomId};
use crate::domain::a004_guest::aggregate::{Guest, GuestId};
use crate::domain::a005_booking::aggregate::{Booking, BookingId};
use crate::domain::a006_service::aggregate::{Service, ServiceId};
use crate::domain::a007_seasonal_price::aggregate::{SeasonalPrice, SeasonalPriceId};
use crate::enums::{
    BookingStatus, GuestStatus, OwnerStatus, PropertyStatus, PropertyType, RoomStatus, RoomType,
};
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Все коллекции сразу
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub owners: Vec<Owner>,
    pub properties: Vec<Property>,
    pub rooms: Vec<Room>,
    pub guests: Vec<Guest>,
    pub bookings: Vec<Booking>,
    pub services: Vec<Service>,
    pub seasonal_prices: Vec<SeasonalPrice>,
}

static FIXTURES: Lazy<Fixtures> = Lazy::new(build);

/// Общий снимок фикстур
pub fn fixtures() -> &'static Fixtures {
    &FIXTURES
}

pub fn owners() -> Vec<Owner> {
    FIXTURES.owners.clone()
}

pub fn properties() -> Vec<Property> {
    FIXTURES.properties.clone()
}

pub fn rooms() -> Vec<Room> {
    FIXTURES.rooms.clone()
}

pub fn guests() -> Vec<Guest> {
    FIXTURES.guests.clone()
}

pub fn bookings() -> Vec<Booking> {
    FIXTURES.bookings.clone()
}

pub fn services() -> Vec<Service> {
    FIXTURES.services.clone()
}

pub fn seasonal_prices() -> Vec<SeasonalPrice> {
    FIXTURES.seasonal_prices.clone()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Литералы ниже заведомо корректны
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[rustfmt::skip]
fn build() -> Fixtures {
    let owners = vec![
        owner(1, "Maria Lopez", "maria.lopez@example.com", "+34 600 100 200", Some("Costa Stays SL"), OwnerStatus::Active),
        owner(2, "James Carter", "james.carter@example.com", "+44 20 7946 0101", None, OwnerStatus::Active),
        owner(3, "Aiko Tanaka", "aiko.tanaka@example.jp", "+81 3 1234 5678", Some("Sakura Hospitality"), OwnerStatus::Active),
        owner(4, "Pierre Martin", "pierre.martin@example.fr", "+33 1 23 45 67 89", None, OwnerStatus::Inactive),
    ];

    let properties = vec![
        property(1, "Grand Hotel", "Paris", "France", PropertyType::Hotel, 4, 4.6, 240.0, PropertyStatus::Active),
        property(2, "Villa Azul", "Marbella", "Spain", PropertyType::Villa, 1, 4.9, 520.0, PropertyStatus::Active),
        property(3, "Harbour View Apartments", "Barcelona", "Spain", PropertyType::Apartment, 1, 4.2, 140.0, PropertyStatus::Active),
        property(4, "Sakura Resort", "Kyoto", "Japan", PropertyType::Resort, 3, 4.8, 380.0, PropertyStatus::Active),
        property(5, "Camden Backpackers", "London", "United Kingdom", PropertyType::Hostel, 2, 3.9, 45.0, PropertyStatus::Maintenance),
        property(6, "Hotel Lumiere", "Lyon", "France", PropertyType::Hotel, 4, 4.1, 160.0, PropertyStatus::Inactive),
    ];

    let mut owners = owners;
    for o in owners.iter_mut() {
        o.properties_count = properties.iter().filter(|p| p.owner_id == o.base.id).count() as u32;
    }

    let rooms = vec![
        room(1, 1, "101", RoomType::Standard, 2, 240.0, RoomStatus::Available),
        room(2, 1, "204", RoomType::Deluxe, 2, 320.0, RoomStatus::Occupied),
        room(3, 1, "501", RoomType::Suite, 4, 610.0, RoomStatus::Available),
        room(4, 2, "Main", RoomType::Family, 8, 520.0, RoomStatus::Available),
        room(5, 3, "3B", RoomType::Standard, 3, 140.0, RoomStatus::Occupied),
        room(6, 4, "Garden 1", RoomType::Suite, 2, 420.0, RoomStatus::Available),
        room(7, 4, "Garden 2", RoomType::Deluxe, 2, 380.0, RoomStatus::Maintenance),
        room(8, 5, "Dorm A", RoomType::Dormitory, 10, 45.0, RoomStatus::Maintenance),
    ];

    let guests = vec![
        guest(1, "Emma Schneider", "emma.schneider@example.de", "Germany", 5, GuestStatus::Active),
        guest(2, "Lucas Silva", "lucas.silva@example.br", "Brazil", 2, GuestStatus::Active),
        guest(3, "Olivia Brown", "olivia.brown@example.com", "United States", 9, GuestStatus::Active),
        guest(4, "Noah Wilson", "noah.wilson@example.ca", "Canada", 1, GuestStatus::Blocked),
        guest(5, "Sofia Rossi", "sofia.rossi@example.it", "Italy", 3, GuestStatus::Active),
        guest(6, "Hiro Sato", "hiro.sato@example.jp", "Japan", 0, GuestStatus::Active),
    ];

    let bookings = vec![
        booking(1, 1, 1, 1, (2024, 7, 10), (2024, 7, 14), 2, 1248.0, BookingStatus::Confirmed),
        booking(2, 2, 2, 4, (2024, 8, 1), (2024, 8, 8), 6, 4732.0, BookingStatus::Pending),
        booking(3, 3, 4, 6, (2024, 4, 2), (2024, 4, 5), 2, 1638.0, BookingStatus::CheckedOut),
        booking(4, 5, 3, 5, (2024, 9, 12), (2024, 9, 15), 3, 420.0, BookingStatus::Cancelled),
        booking(5, 3, 1, 2, (2024, 12, 20), (2024, 12, 27), 2, 2912.5, BookingStatus::Confirmed),
        booking(6, 1, 4, 6, (2024, 10, 5), (2024, 10, 7), 1, 840.0, BookingStatus::CheckedIn),
        booking(7, 6, 1, 3, (2025, 1, 3), (2025, 1, 6), 4, 1830.0, BookingStatus::Pending),
    ];

    let services = vec![
        service(1, "Breakfast buffet", "Food & Beverage", 18.0, true, true),
        service(2, "Airport transfer", "Transport", 55.0, false, true),
        service(3, "Spa day pass", "Wellness", 90.0, false, true),
        service(4, "Late checkout", "Stay", 35.0, false, true),
        service(5, "Parking", "Transport", 12.0, true, false),
    ];

    let seasonal_prices = vec![
        season(1, 1, "Summer peak", (2024, 7, 1), (2024, 8, 31), 1.3),
        season(2, 1, "Christmas", (2024, 12, 20), (2025, 1, 2), 1.5),
        season(3, 2, "High season", (2024, 6, 15), (2024, 9, 15), 1.4),
        season(4, 4, "Cherry blossom", (2024, 3, 25), (2024, 4, 15), 1.6),
        season(5, 5, "Winter low", (2024, 11, 1), (2025, 2, 28), 0.8),
    ];

    Fixtures {
        owners,
        properties,
        rooms,
        guests,
        bookings,
        services,
        seasonal_prices,
    }
}

fn owner(
    n: u128,
    name: &str,
    email: &str,
    phone: &str,
    company: Option<&str>,
    status: OwnerStatus,
) -> Owner {
    let mut o = Owner::new(OwnerId::from_u128(n), format!("OWN-{:03}", n), name, email, phone);
    o.company = company.map(str::to_string);
    o.status = status;
    o
}

#[allow(clippy::too_many_arguments)]
fn property(
    n: u128,
    name: &str,
    city: &str,
    country: &str,
    property_type: PropertyType,
    owner: u128,
    rating: f64,
    base_rate: f64,
    status: PropertyStatus,
) -> Property {
    let mut p = Property::new(
        PropertyId::from_u128(n),
        format!("PRP-{:03}", n),
        name,
        city,
        country,
        property_type,
        OwnerId::from_u128(owner),
        base_rate,
    );
    p.rating = rating;
    p.status = status;
    p
}

fn room(
    n: u128,
    property: u128,
    number: &str,
    room_type: RoomType,
    capacity: u32,
    rate: f64,
    status: RoomStatus,
) -> Room {
    let mut r = Room::new(
        RoomId::from_u128(n),
        PropertyId::from_u128(property),
        number,
        room_type,
        capacity,
        rate,
    );
    r.status = status;
    r
}

fn guest(n: u128, name: &str, email: &str, country: &str, stays: u32, status: GuestStatus) -> Guest {
    let mut g = Guest::new(GuestId::from_u128(n), format!("GST-{:04}", n), name, email, country);
    g.total_stays = stays;
    g.status = status;
    g
}

#[allow(clippy::too_many_arguments)]
fn booking(
    n: u128,
    guest: u128,
    property: u128,
    room: u128,
    check_in: (i32, u32, u32),
    check_out: (i32, u32, u32),
    guests: u32,
    total: f64,
    status: BookingStatus,
) -> Booking {
    let mut b = Booking::new(
        BookingId::from_u128(n),
        format!("BK-{:04}", n),
        GuestId::from_u128(guest),
        PropertyId::from_u128(property),
        RoomId::from_u128(room),
        date(check_in.0, check_in.1, check_in.2),
        date(check_out.0, check_out.1, check_out.2),
        guests,
        total,
    );
    b.status = status;
    b
}

fn service(n: u128, name: &str, category: &str, price: f64, per_night: bool, active: bool) -> Service {
    let mut s = Service::new(ServiceId::from_u128(n), format!("SRV-{:03}", n), name, category, price, per_night);
    s.is_active = active;
    s
}

fn season(
    n: u128,
    property: u128,
    name: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    multiplier: f64,
) -> SeasonalPrice {
    SeasonalPrice::new(
        SeasonalPriceId::from_u128(n),
        PropertyId::from_u128(property),
        name,
        date(start.0, start.1, start.2),
        date(end.0, end.1, end.2),
        multiplier,
    )
}

/// Проверить фикстуры: валидность записей и целостность ссылок
pub fn verify(f: &Fixtures) -> anyhow::Result<()> {
    for o in &f.owners {
        o.validate().map_err(|e| anyhow!(e)).with_context(|| format!("owner {}", o.base.code))?;
    }
    for p in &f.properties {
        p.validate().map_err(|e| anyhow!(e)).with_context(|| format!("property {}", p.base.code))?;
        if !f.owners.iter().any(|o| o.base.id == p.owner_id) {
            return Err(anyhow!("property {} references unknown owner", p.base.code));
        }
    }
    for r in &f.rooms {
        r.validate().map_err(|e| anyhow!(e)).with_context(|| format!("room {}", r.base.code))?;
        if !f.properties.iter().any(|p| p.base.id == r.property_id) {
            return Err(anyhow!("room {} references unknown property", r.base.code));
        }
    }
    for g in &f.guests {
        g.validate().map_err(|e| anyhow!(e)).with_context(|| format!("guest {}", g.base.code))?;
    }
    for b in &f.bookings {
        b.validate().map_err(|e| anyhow!(e)).with_context(|| format!("booking {}", b.base.code))?;
        let room = f
            .rooms
            .iter()
            .find(|r| r.base.id == b.room_id)
            .ok_or_else(|| anyhow!("booking {} references unknown room", b.base.code))?;
        if room.property_id != b.property_id {
            return Err(anyhow!("booking {} room belongs to another property", b.base.code));
        }
        if !f.guests.iter().any(|g| g.base.id == b.guest_id) {
            return Err(anyhow!("booking {} references unknown guest", b.base.code));
        }
    }
    for s in &f.services {
        s.validate().map_err(|e| anyhow!(e)).with_context(|| format!("service {}", s.base.code))?;
    }
    for s in &f.seasonal_prices {
        s.validate().map_err(|e| anyhow!(e)).with_context(|| format!("season {}", s.base.code))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_consistent() {
        verify(fixtures()).unwrap();
    }

    #[test]
    fn test_fixture_sizes() {
        let f = fixtures();
        assert_eq!(f.owners.len(), 4);
        assert_eq!(f.properties.len(), 6);
        assert_eq!(f.rooms.len(), 8);
        assert_eq!(f.guests.len(), 6);
        assert_eq!(f.bookings.len(), 7);
        assert_eq!(f.services.len(), 5);
        assert_eq!(f.seasonal_prices.len(), 5);
    }

    #[test]
    fn test_owner_property_counts() {
        let counts: Vec<u32> = fixtures().owners.iter().map(|o| o.properties_count).collect();
        assert_eq!(counts, vec![2, 1, 1, 2]);
    }

    #[test]
    fn test_verify_reports_dangling_reference() {
        let mut f = fixtures().clone();
        f.rooms[0].property_id = PropertyId::from_u128(999);
        let err = verify(&f).unwrap_err();
        assert!(err.to_string().contains("unknown property"));
    }

    #[test]
    fn test_verify_reports_invalid_record_with_context() {
        let mut f = fixtures().clone();
        f.guests[0].email = "broken".into();
        let err = verify(&f).unwrap_err();
        assert_eq!(err.to_string(), "guest GST-0001");
    }

    #[test]
    fn test_fixtures_snapshot_is_serializable() {
        let json = serde_json::to_string(&fixtures().bookings).unwrap();
        assert!(json.contains("\"BK-0007\""));
    }
}
