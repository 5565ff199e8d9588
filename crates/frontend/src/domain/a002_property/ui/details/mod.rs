mod view;
mod view_model;

pub use view::PropertyDetails;
pub use view_model::{PropertyDetailsViewModel, PropertyForm};
