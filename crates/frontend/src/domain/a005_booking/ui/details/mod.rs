//! Booking details: editable dates, guests, amount and status, plus the
//! stay quote computed from the room rate, seasons and chosen extras.

mod view;
mod view_model;

pub use view::BookingDetails;
pub use view_model::{quote_for, BookingDetailsViewModel, BookingForm};
