pub mod a001_owner;
pub mod a002_property;
pub mod a003_room;
pub mod a004_guest;
pub mod a005_booking;
pub mod a006_service;
pub mod a007_seasonal_price;
