mod view;
mod view_model;

pub use view::SeasonalPriceDetails;
pub use view_model::{SeasonalPriceDetailsViewModel, SeasonalPriceForm};
