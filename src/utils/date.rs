use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First calendar day inside a trailing window of `days` days ending today.
/// Entries dated on the boundary day itself are inside the window.
pub fn window_start(days: u32) -> NaiveDate {
    today() - Days::new(u64::from(days))
}
