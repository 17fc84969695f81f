use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Wire format for calendar dates accepted by the transports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date as midnight UTC.
pub fn parse_calendar_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map(|day| day.and_time(NaiveTime::MIN).and_utc())
}
