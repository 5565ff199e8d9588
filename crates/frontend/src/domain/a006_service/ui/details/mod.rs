mod view;
mod view_model;

pub use view::ServiceDetails;
pub use view_model::{ServiceDetailsViewModel, ServiceForm};
