//! Generic filterable, paginated table.
//!
//! Everything except `data_table` is plain data logic and is unit-tested on
//! the host target.

pub mod actions;
pub mod cell;
pub mod column;
pub mod data_table;
pub mod filter;
pub mod format;
pub mod number_format;
pub mod pagination;
pub mod state;

pub use actions::RowAction;
pub use cell::{CellValue, MapRow, TableRow};
pub use column::{Column, ColumnType};
pub use data_table::DataTable;
pub use state::TableState;
