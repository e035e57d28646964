//! Flattens a report into a table and writes it to a workbook.

mod table;
mod xlsx;

pub use table::{GamesTable, COMMON_GAMES_COLUMN};
pub use xlsx::write_workbook;

/// Default file name for the report.
pub const DEFAULT_OUTPUT_FILENAME: &str = "Common_Games.xlsx";
