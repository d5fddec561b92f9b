use crate::grouping::Grouping;
use serde::Serialize;
use std::fmt;
use time::Date;

/// One generated period: its start date and the last day it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    pub grouping: Grouping,
    pub start: Date,
    pub end: Date, // inclusive
}

impl Period {
    pub fn new(grouping: Grouping, start: Date) -> Self {
        Self { grouping, start, end: grouping.period_end(start) }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
