pub mod form_fields;
pub mod pagination_controls;
pub mod table;
pub mod ui;
