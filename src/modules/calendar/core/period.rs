use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// The calendar span a range query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day,
    Week,
    Month,
}

/// Half-open interval `[start, end)`. `end` is `None` when the following
/// boundary falls outside the representable calendar; a start that would
/// fall before it is clamped to the first representable day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && self.end.is_none_or(|end| instant < end)
    }
}

impl Period {
    /// Normalizes `date` to the start of its period and pairs it with the
    /// exclusive start of the next one. Weeks start on Monday.
    pub fn range_containing(self, date: DateTime<Utc>) -> DateRange {
        let day = date.date_naive();
        let (start, end) = match self {
            Period::Day => (day, day.checked_add_days(Days::new(1))),
            Period::Week => {
                let back = u64::from(day.weekday().num_days_from_monday());
                let monday = day.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN);
                (monday, monday.checked_add_days(Days::new(7)))
            }
            Period::Month => {
                let first = day.with_day(1).unwrap_or(day);
                (first, first.checked_add_months(Months::new(1)))
            }
        };
        DateRange {
            start: midnight(start),
            end: end.map(midnight),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        })
    }
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
