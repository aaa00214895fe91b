use chrono::{Local, NaiveDate, NaiveDateTime};

/// Wall-clock "now" without timezone, as written into sheet cells.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Timestamp format used by every sheet cell holding a date-time.
pub fn format_sheet_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn parse_sheet_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()
}

/// Long-form Japanese date for the {{date}} placeholder.
pub fn japanese_date(d: NaiveDate) -> String {
    d.format("%Y年%m月%d日").to_string()
}

/// Compact date used in generated PDF file names.
pub fn compact_date(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}
