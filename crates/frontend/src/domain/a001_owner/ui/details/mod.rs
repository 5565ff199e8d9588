mod view;
mod view_model;

pub use view::OwnerDetails;
pub use view_model::{OwnerDetailsViewModel, OwnerForm};
