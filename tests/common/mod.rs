#![allow(dead_code)]

use periodgen::{Date, PeriodGenerator};

/// Drain a generator through `advance()`, collecting every reported cursor.
pub fn drain(g: &mut PeriodGenerator) -> Vec<Date> {
    let mut out = Vec::new();
    while g.advance() {
        out.push(g.current_date().expect("cursor set after a successful advance"));
    }
    out
}

/// Drain through `advance_until(until)` only, stopping at the first stall or finish.
pub fn drain_until(g: &mut PeriodGenerator, until: Date) -> Vec<Date> {
    let mut out = Vec::new();
    while g.advance_until(until).has_next {
        out.push(g.current_date().expect("cursor set after a successful advance"));
    }
    out
}

/// Whole days between two dates (`b - a`).
pub fn days_between(a: Date, b: Date) -> i64 {
    (b - a).whole_days()
}
