use std::fmt;
use time::macros::format_description;
use time::{Date, Duration, Month};

/// Simple (year, month) utility with year-rolling arithmetic and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u8, // 1..=12
}

impl YearMonth {
    pub fn from_date(date: Date) -> Self {
        Self { year: date.year(), month: date.month() as u8 }
    }
    pub fn next(self) -> Option<Self> {
        if self.month < 12 {
            Some(Self { year: self.year, month: self.month + 1 })
        } else {
            Some(Self { year: self.year.checked_add(1)?, month: 1 })
        }
    }
    pub fn prev(self) -> Option<Self> {
        if self.month > 1 {
            Some(Self { year: self.year, month: self.month - 1 })
        } else {
            Some(Self { year: self.year.checked_sub(1)?, month: 12 })
        }
    }
    /// Day 1 of the month, or `None` when the year is outside `time::Date`'s range.
    pub fn first_day(self) -> Option<Date> {
        let month = Month::try_from(self.month).ok()?;
        Date::from_calendar_date(self.year, month, 1).ok()
    }
    /// Last day of the month, or `None` when the year is outside `time::Date`'s range.
    pub fn last_day(self) -> Option<Date> {
        let month = Month::try_from(self.month).ok()?;
        let days = time::util::days_in_year_month(self.year, month);
        Date::from_calendar_date(self.year, month, days).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Offset `date` by a signed number of days, clamping at the ends of the calendar.
#[inline]
pub fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(Duration::days(days))
}

/// Parse a `YYYY-MM-DD` literal.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
}
