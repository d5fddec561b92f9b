#[path = "common/mod.rs"]
mod common;

use common::*;
use periodgen::{Advance, GeneratorState, Grouping, PeriodGenerator, Weekday};
use time::macros::date;

/// Walk 2013-04-11..=2013-07-17 by day, hitting `advance_until(2013-06-04)` four
/// times before draining with `advance()`.
/// Outcome: 98 periods in total, index 54 is the boundary day 2013-06-04, and
/// the sequence equals a plain `advance()` walk.
#[test]
fn repeated_until_then_drain_matches_plain_walk() {
    let start = date!(2013 - 04 - 11);
    let end = date!(2013 - 07 - 17);
    let until = date!(2013 - 06 - 04);

    let mut g = PeriodGenerator::forward(start, end, Grouping::Day).unwrap();
    let mut dates = Vec::new();
    for _ in 0..4 {
        dates.extend(drain_until(&mut g, until));
        assert_eq!(g.current_date(), Some(until));
    }
    assert_eq!(dates.len(), 54);
    dates.extend(drain(&mut g));

    assert_eq!(dates.len(), 98);
    assert_eq!(dates[54], until);

    let mut plain = PeriodGenerator::forward(start, end, Grouping::Day).unwrap();
    assert_eq!(dates, drain(&mut plain));
}

/// Once stalled, the same boundary keeps returning (false, false) without moving.
#[test]
fn stall_is_idempotent() {
    let mut g =
        PeriodGenerator::forward(date!(2013 - 08 - 02), date!(2013 - 08 - 10), Grouping::Day)
            .unwrap();
    let until = date!(2013 - 08 - 05);
    assert_eq!(drain_until(&mut g, until).len(), 3);
    for _ in 0..5 {
        let r = g.advance_until(until);
        assert_eq!(<(bool, bool)>::from(r), (false, false));
        assert_eq!(g.current_date(), Some(until));
        assert_eq!(g.state(), GeneratorState::Pending);
    }
    assert!(!g.is_finished());
}

/// Raising the boundary resumes from the stalled period without skipping it.
#[test]
fn later_boundary_resumes_the_walk() {
    let mut g =
        PeriodGenerator::forward(date!(2013 - 08 - 02), date!(2013 - 08 - 10), Grouping::Day)
            .unwrap();
    let first = drain_until(&mut g, date!(2013 - 08 - 04));
    let second = drain_until(&mut g, date!(2013 - 08 - 07));
    let rest = drain(&mut g);
    assert_eq!(first, vec![date!(2013 - 08 - 02), date!(2013 - 08 - 03)]);
    assert_eq!(
        second,
        vec![date!(2013 - 08 - 04), date!(2013 - 08 - 05), date!(2013 - 08 - 06)]
    );
    assert_eq!(rest.first(), Some(&date!(2013 - 08 - 07)));
    assert_eq!(first.len() + second.len() + rest.len(), 9);
}

/// A boundary past the configured end drains the range and then finishes.
#[test]
fn boundary_beyond_end_finishes() {
    let mut g =
        PeriodGenerator::forward(date!(2013 - 05 - 12), date!(2013 - 08 - 25), Grouping::Month)
            .unwrap();
    let until = date!(2014 - 01 - 01);
    assert_eq!(drain_until(&mut g, until).len(), 4);
    assert_eq!(g.advance_until(until), Advance { has_next: false, is_finished: true });
    assert!(g.is_finished());
    assert!(!g.advance());
}

/// A boundary inside the last period stalls on it like any other boundary;
/// `advance()` then reports the last period and the walk finishes.
#[test]
fn boundary_on_last_period_stalls_before_it() {
    let end = date!(2013 - 08 - 04);
    let mut g = PeriodGenerator::forward(date!(2013 - 08 - 02), end, Grouping::Day).unwrap();
    assert_eq!(
        drain_until(&mut g, end),
        vec![date!(2013 - 08 - 02), date!(2013 - 08 - 03)]
    );
    for _ in 0..3 {
        assert_eq!(
            g.advance_until(end),
            Advance { has_next: false, is_finished: false }
        );
        assert_eq!(g.current_date(), Some(end));
    }
    assert!(!g.is_finished());

    assert!(g.advance());
    assert_eq!(g.current_date(), Some(end));
    assert!(g.is_finished());
    assert_eq!(
        g.advance_until(end),
        Advance { has_next: false, is_finished: true }
    );
    assert!(!g.advance());
}

/// The boundary is mapped to its period start: any date inside the boundary
/// week stalls on the same week.
#[test]
fn week_boundary_uses_period_start() {
    let mut g =
        PeriodGenerator::forward(date!(2013 - 08 - 01), date!(2013 - 09 - 30), Grouping::Week)
            .unwrap()
            .with_first_day_of_week(Weekday::Wednesday);
    // 2013-08-16 is a Friday inside the week starting Wednesday 2013-08-14.
    let got = drain_until(&mut g, date!(2013 - 08 - 16));
    assert_eq!(got, vec![date!(2013 - 07 - 31), date!(2013 - 08 - 07)]);
    assert_eq!(g.current_date(), Some(date!(2013 - 08 - 14)));
    assert_eq!(
        g.advance_until(date!(2013 - 08 - 20)),
        Advance { has_next: false, is_finished: false }
    );
    assert!(g.advance());
    assert_eq!(g.current_date(), Some(date!(2013 - 08 - 14)));
}

/// Backward walks stall on boundaries in their own direction of travel.
#[test]
fn backward_until_then_drain() {
    let start = date!(2013 - 08 - 10);
    let end = date!(2013 - 08 - 02);
    let until = date!(2013 - 08 - 06);
    let mut g = PeriodGenerator::backward(start, end, Grouping::Day).unwrap();
    let head = drain_until(&mut g, until);
    assert_eq!(
        head,
        vec![
            date!(2013 - 08 - 10),
            date!(2013 - 08 - 09),
            date!(2013 - 08 - 08),
            date!(2013 - 08 - 07),
        ]
    );
    assert_eq!(
        g.advance_until(until),
        Advance { has_next: false, is_finished: false }
    );
    let tail = drain(&mut g);
    assert_eq!(tail.first(), Some(&until));
    assert_eq!(tail.last(), Some(&end));
    assert_eq!(head.len() + tail.len(), 9);
}

/// A boundary behind the cursor never moves the generator.
#[test]
fn boundary_behind_cursor_stalls() {
    let mut g =
        PeriodGenerator::forward(date!(2013 - 08 - 02), date!(2013 - 08 - 10), Grouping::Day)
            .unwrap();
    assert!(g.advance());
    assert!(g.advance());
    let before = g.current_date();
    assert_eq!(
        g.advance_until(date!(2013 - 08 - 01)),
        Advance { has_next: false, is_finished: false }
    );
    assert_eq!(g.current_date(), before);
    assert_eq!(g.state(), GeneratorState::Active);
}
