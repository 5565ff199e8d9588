pub mod aggregate;
pub mod quote;
