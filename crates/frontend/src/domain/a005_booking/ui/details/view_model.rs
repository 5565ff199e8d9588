use crate::shared::components::form_fields::{date_to_input, parse_count, parse_date, parse_number};
use contracts::domain::a003_room::aggregate::Room;
use contracts::domain::a005_booking::aggregate::{Booking, BookingDto};
use contracts::domain::a005_booking::quote::{quote_stay, StayQuote};
use contracts::domain::a006_service::aggregate::{Service, ServiceId};
use contracts::domain::a007_seasonal_price::aggregate::SeasonalPrice;
use contracts::enums::BookingStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub total_amount: String,
    pub status: String,
}

impl From<&Booking> for BookingForm {
    fn from(b: &Booking) -> Self {
        Self {
            check_in: date_to_input(b.check_in),
            check_out: date_to_input(b.check_out),
            guests: b.guests.to_string(),
            total_amount: b.total_amount.to_string(),
            status: b.status.as_str().to_string(),
        }
    }
}

impl BookingForm {
    pub fn to_dto(&self) -> Result<BookingDto, String> {
        let status = BookingStatus::from_label(&self.status)
            .ok_or_else(|| format!("Unknown status: {}", self.status))?;
        Ok(BookingDto {
            check_in: parse_date("Check-in", &self.check_in)?,
            check_out: parse_date("Check-out", &self.check_out)?,
            guests: parse_count("Guests", &self.guests)?,
            total_amount: parse_number("Total", &self.total_amount)?,
            status,
        })
    }

    /// Применить форму; если номер известен, проверяется его вместимость
    pub fn apply_to(&self, original: &Booking, room: Option<&Room>) -> Result<Booking, String> {
        let dto = self.to_dto()?;
        let mut updated = original.clone();
        updated.update(&dto);
        updated.validate()?;
        if let Some(room) = room {
            if !room.fits(updated.guests) {
                return Err(format!(
                    "Room {} fits at most {} guests",
                    room.number, room.capacity
                ));
            }
        }
        Ok(updated)
    }
}

/// Quote for the dates currently typed into the form
pub fn quote_for(
    check_in: &str,
    check_out: &str,
    room: Option<&Room>,
    seasons: &[SeasonalPrice],
    extras: &[Service],
) -> Result<StayQuote, String> {
    let room = room.ok_or_else(|| "Room not found".to_string())?;
    let check_in = parse_date("Check-in", check_in)?;
    let check_out = parse_date("Check-out", check_out)?;
    quote_stay(room.nightly_rate, check_in, check_out, seasons, extras)
}

#[derive(Clone, Copy)]
pub struct BookingDetailsViewModel {
    pub check_in: RwSignal<String>,
    pub check_out: RwSignal<String>,
    pub guests: RwSignal<String>,
    pub total_amount: RwSignal<String>,
    pub status: RwSignal<String>,
    /// Услуги, включённые в расчёт
    pub extras: RwSignal<Vec<ServiceId>>,
    pub error: RwSignal<Option<String>>,
}

impl BookingDetailsViewModel {
    pub fn new(booking: &Booking) -> Self {
        let form = BookingForm::from(booking);
        Self {
            check_in: RwSignal::new(form.check_in),
            check_out: RwSignal::new(form.check_out),
            guests: RwSignal::new(form.guests),
            total_amount: RwSignal::new(form.total_amount),
            status: RwSignal::new(form.status),
            extras: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> BookingForm {
        BookingForm {
            check_in: self.check_in.get_untracked(),
            check_out: self.check_out.get_untracked(),
            guests: self.guests.get_untracked(),
            total_amount: self.total_amount.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn toggle_extra(&self, id: ServiceId, on: bool) {
        self.extras.update(|ids| {
            ids.retain(|x| *x != id);
            if on {
                ids.push(id);
            }
        });
    }

    pub fn save_command(&self, original: &Booking, room: Option<&Room>, on_saved: Callback<Booking>) {
        match self.form().apply_to(original, room) {
            Ok(updated) => {
                self.error.set(None);
                on_saved.run(updated);
            }
            Err(e) => {
                log::warn!("booking {}: {}", original.base.code, e);
                self.error.set(Some(e));
            }
        }
    }

    pub fn cancel_command(&self, original: &Booking, on_saved: Callback<Booking>) {
        let mut updated = original.clone();
        match updated.cancel() {
            Ok(()) => on_saved.run(updated),
            Err(e) => self.error.set(Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures;

    fn room_of(booking: &Booking) -> Option<Room> {
        fixtures::rooms().into_iter().find(|r| r.base.id == booking.room_id)
    }

    #[test]
    fn test_guests_over_capacity_are_rejected() {
        let booking = &fixtures::bookings()[0];
        let room = room_of(booking);
        let mut form = BookingForm::from(booking);
        form.guests = "3".into();
        assert_eq!(
            form.apply_to(booking, room.as_ref()).unwrap_err(),
            "Room 101 fits at most 2 guests"
        );
    }

    #[test]
    fn test_move_dates() {
        let booking = &fixtures::bookings()[0];
        let mut form = BookingForm::from(booking);
        form.check_out = "2024-07-12".into();
        let updated = form.apply_to(booking, None).unwrap();
        assert_eq!(updated.nights(), 2);
    }

    #[test]
    fn test_check_out_before_check_in_is_rejected() {
        let booking = &fixtures::bookings()[0];
        let mut form = BookingForm::from(booking);
        form.check_out = form.check_in.clone();
        assert_eq!(
            form.apply_to(booking, None).unwrap_err(),
            "Check-out must be after check-in"
        );
    }

    #[test]
    fn test_quote_uses_seasons_of_the_property() {
        let f = fixtures::fixtures();
        let booking = &f.bookings[0];
        let room = room_of(booking);
        let seasons: Vec<SeasonalPrice> = f
            .seasonal_prices
            .iter()
            .filter(|s| s.property_id == booking.property_id)
            .cloned()
            .collect();

        // 4 ночи по 240 в летний сезон (x1.3)
        let quote = quote_for("2024-07-10", "2024-07-14", room.as_ref(), &seasons, &[]).unwrap();
        assert_eq!(quote.nights, 4);
        assert!((quote.room_total - 1248.0).abs() < 1e-9);
        assert!((quote.total - booking.total_amount).abs() < 1e-9);

        let breakfast = &f.services[0];
        let quote = quote_for(
            "2024-07-10",
            "2024-07-14",
            room.as_ref(),
            &seasons,
            std::slice::from_ref(breakfast),
        )
        .unwrap();
        assert!((quote.services_total - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_quote_without_room_or_with_bad_dates() {
        assert_eq!(
            quote_for("2024-07-10", "2024-07-14", None, &[], &[]).unwrap_err(),
            "Room not found"
        );
        let room = fixtures::rooms().into_iter().next();
        assert!(quote_for("", "2024-07-14", room.as_ref(), &[], &[]).is_err());
    }
}
