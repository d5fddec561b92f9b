//! Period granularity and walking direction.
//!
//! Each [`Grouping`] carries a pair of pure rules: the period-start rule
//! ([`Grouping::first_from_date`]) and the step rule ([`Grouping::step`]).
//! The generator only ever moves between period-start dates produced by
//! these two functions.

use crate::date::{add_days, YearMonth};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::{Date, Weekday};

/// Period granularity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Day,
    Week,
    Month,
}

impl Grouping {
    /// Start of the period containing `date`.
    ///
    /// `first_day_of_week` is only consulted for [`Grouping::Week`]; weeks
    /// start on the most recent `first_day_of_week` at or before `date`.
    pub fn first_from_date(self, date: Date, first_day_of_week: Weekday) -> Date {
        match self {
            Grouping::Day => date,
            Grouping::Week => {
                let wd = i64::from(date.weekday().number_days_from_sunday());
                let first = i64::from(first_day_of_week.number_days_from_sunday());
                add_days(date, -(wd - first).rem_euclid(7))
            }
            Grouping::Month => YearMonth::from_date(date).first_day().unwrap_or(date),
        }
    }

    /// Move a period-start date one period in `direction`.
    pub fn step(self, date: Date, direction: Direction) -> Date {
        match self {
            Grouping::Day => add_days(date, direction.signum()),
            Grouping::Week => add_days(date, 7 * direction.signum()),
            Grouping::Month => {
                let ym = YearMonth::from_date(date);
                let (moved, limit) = match direction {
                    Direction::Forward => (ym.next(), Date::MAX),
                    Direction::Backward => (ym.prev(), Date::MIN),
                };
                moved.and_then(YearMonth::first_day).unwrap_or(limit)
            }
        }
    }

    /// Last day covered by the period starting at `start`.
    pub fn period_end(self, start: Date) -> Date {
        match self {
            Grouping::Day => start,
            Grouping::Week => add_days(start, 6),
            Grouping::Month => YearMonth::from_date(start).last_day().unwrap_or(Date::MAX),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grouping::Day => "day",
            Grouping::Week => "week",
            Grouping::Month => "month",
        })
    }
}

impl FromStr for Grouping {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Grouping::Day),
            "w" | "week" | "weekly" => Ok(Grouping::Week),
            "m" | "month" | "monthly" => Ok(Grouping::Month),
            other => Err(format!("unknown grouping '{other}' (expected day, week or month)")),
        }
    }
}

/// Direction of travel along the date axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }

    #[inline]
    fn signum(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// True when `cursor` is at or past `boundary` in the direction of travel.
    #[inline]
    pub fn reached(self, cursor: Date, boundary: Date) -> bool {
        match self {
            Direction::Forward => cursor >= boundary,
            Direction::Backward => cursor <= boundary,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        })
    }
}

impl FromStr for Direction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fwd" | "forward" => Ok(Direction::Forward),
            "b" | "bwd" | "backward" | "backwards" => Ok(Direction::Backward),
            other => Err(format!("unknown direction '{other}' (expected forward or backward)")),
        }
    }
}

/// Parse an English weekday name or its three-letter abbreviation.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    let wd = match s.trim().to_ascii_lowercase().as_str() {
        "sun" | "sunday" => Weekday::Sunday,
        "mon" | "monday" => Weekday::Monday,
        "tue" | "tuesday" => Weekday::Tuesday,
        "wed" | "wednesday" => Weekday::Wednesday,
        "thu" | "thursday" => Weekday::Thursday,
        "fri" | "friday" => Weekday::Friday,
        "sat" | "saturday" => Weekday::Saturday,
        _ => return None,
    };
    Some(wd)
}
