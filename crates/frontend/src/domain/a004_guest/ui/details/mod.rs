//! Guest details: view model with form state and a modal view.

mod view;
mod view_model;

pub use view::GuestDetails;
pub use view_model::{GuestDetailsViewModel, GuestForm};
