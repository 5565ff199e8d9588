pub mod store;

pub use store::HotelStore;
