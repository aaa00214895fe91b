pub mod date;
pub mod table;

pub use date::format_sheet_datetime;
pub use date::parse_sheet_datetime;
