pub mod components;
pub mod data;
pub mod icons;
pub mod list_utils;
pub mod modal;
