//! Resumable period generator.
//!
//! A [`PeriodGenerator`] walks the period-start dates between two bounds,
//! one period per call. The lifecycle is an explicit state machine:
//!
//! ```text
//! Uninitialized --first tick--> Pending --report--> Active --step--> Active
//!                                  ^                  |
//!                                  +--stall on bound--+--end consumed--> Finished
//! ```
//!
//! `Pending` means the cursor sits on a period that has not been reported
//! yet: either the very first period, or the period `advance_until` stopped
//! on. The next successful tick reports it without stepping, so a walk that
//! is interrupted by any number of `advance_until` calls yields exactly the
//! same sequence as a plain `advance` loop.

use crate::error::{PeriodError, Result};
use crate::grouping::{Direction, Grouping};
use crate::period::Period;
use std::iter::FusedIterator;
use time::{Date, Weekday};

/// Lifecycle of a [`PeriodGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratorState {
    /// No advance call yet; bounds not computed.
    Uninitialized,
    /// Cursor is on a period that has not been reported.
    Pending,
    /// Cursor is on the most recently reported period.
    Active,
    /// The last period of the range has been reported and consumed.
    Finished,
}

/// Result of [`PeriodGenerator::advance_until`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// A new period was produced and is available as the current date.
    pub has_next: bool,
    /// The configured end of the range has been reached.
    pub is_finished: bool,
}

impl From<Advance> for (bool, bool) {
    fn from(a: Advance) -> Self {
        (a.has_next, a.is_finished)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tick {
    Produced,
    Stalled,
    Exhausted,
}

/// Snapshot taken on the first tick.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    first: Date,
    last: Date,
}

/// Stateful walker over the periods of a date range.
#[derive(Clone, Debug)]
pub struct PeriodGenerator {
    start_date: Date,
    end_date: Date,
    grouping: Grouping,
    direction: Direction,
    first_day_of_week: Weekday,

    state: GeneratorState,
    bounds: Option<Bounds>,
    current: Option<Date>,
}

impl PeriodGenerator {
    /// Creates a generator walking from `start` to `end` in `direction`.
    ///
    /// Fails with [`PeriodError::InvalidRange`] when `start` lies after `end`
    /// for a forward walk, or before `end` for a backward one.
    pub fn new(start: Date, end: Date, grouping: Grouping, direction: Direction) -> Result<Self> {
        let inverted = if direction.is_forward() {
            start > end
        } else {
            start < end
        };
        if inverted {
            return Err(PeriodError::InvalidRange { start, end, direction });
        }
        Ok(Self {
            start_date: start,
            end_date: end,
            grouping,
            direction,
            first_day_of_week: Weekday::Monday,
            state: GeneratorState::Uninitialized,
            bounds: None,
            current: None,
        })
    }

    /// Chronological generator; requires `start <= end`.
    pub fn forward(start: Date, end: Date, grouping: Grouping) -> Result<Self> {
        Self::new(start, end, grouping, Direction::Forward)
    }

    /// Reverse-chronological generator; requires `start >= end`.
    pub fn backward(start: Date, end: Date, grouping: Grouping) -> Result<Self> {
        Self::new(start, end, grouping, Direction::Backward)
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.set_first_day_of_week(first_day_of_week);
        self
    }

    /// Sets the weekday weeks start on. Only honoured before the first
    /// advance; returns `false` (and leaves the setting alone) afterwards.
    pub fn set_first_day_of_week(&mut self, first_day_of_week: Weekday) -> bool {
        if self.state != GeneratorState::Uninitialized {
            tracing::warn!(
                current = %self.first_day_of_week,
                requested = %first_day_of_week,
                "first day of week cannot change once generation has started"
            );
            return false;
        }
        self.first_day_of_week = first_day_of_week;
        true
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Period-start of `start_date`; `None` until the first advance.
    pub fn first_date(&self) -> Option<Date> {
        self.bounds.map(|b| b.first)
    }

    /// Period-start of `end_date`; `None` until the first advance.
    pub fn last_date(&self) -> Option<Date> {
        self.bounds.map(|b| b.last)
    }

    /// The cursor. After a stalled `advance_until` this is the boundary
    /// period, which the next successful advance reports.
    pub fn current_date(&self) -> Option<Date> {
        self.current
    }

    pub fn current_period(&self) -> Option<Period> {
        self.current.map(|d| Period::new(self.grouping, d))
    }

    /// Start of the period containing `date` under this generator's grouping.
    pub fn first_from_date(&self, date: Date) -> Date {
        self.grouping.first_from_date(date, self.first_day_of_week)
    }

    /// Moves to the next period. Returns `false` once the range is exhausted.
    pub fn advance(&mut self) -> bool {
        self.tick(None, true) == Tick::Produced
    }

    /// Moves to the next period that starts strictly before the period
    /// containing `date`.
    ///
    /// Once the cursor lands on that boundary period the call reports
    /// `has_next == false` without finishing, and keeps doing so without
    /// moving until a later `date` is given or [`advance`](Self::advance)
    /// resumes the walk. A `date` inside the last period stalls on it like
    /// any other boundary; a `date` past the last period behaves like
    /// `advance`. A `date` behind the cursor (or against the direction
    /// of travel) is a precondition violation and simply stalls.
    pub fn advance_until(&mut self, date: Date) -> Advance {
        let boundary = self.first_from_date(date);
        match self.tick(Some(boundary), false) {
            Tick::Produced => Advance { has_next: true, is_finished: false },
            Tick::Stalled => Advance { has_next: false, is_finished: false },
            Tick::Exhausted => Advance { has_next: false, is_finished: true },
        }
    }

    /// Whether the cursor has consumed the configured end of the range.
    pub fn is_finished(&self) -> bool {
        match (self.state, self.current, self.bounds) {
            (GeneratorState::Finished, _, _) => true,
            (GeneratorState::Active, Some(current), Some(b)) => {
                self.direction.reached(current, b.last)
            }
            _ => false,
        }
    }

    /// Drains the generator as [`Period`] values.
    pub fn periods(&mut self) -> impl Iterator<Item = Period> + '_ {
        let grouping = self.grouping;
        std::iter::from_fn(move || self.next().map(|d| Period::new(grouping, d)))
    }

    fn initialize(&mut self) -> Bounds {
        let bounds = Bounds {
            first: self.first_from_date(self.start_date),
            last: self.first_from_date(self.end_date),
        };
        tracing::debug!(
            grouping = %self.grouping,
            direction = %self.direction,
            first = %bounds.first,
            last = %bounds.last,
            "period generation started"
        );
        self.bounds = Some(bounds);
        self.current = Some(bounds.first);
        self.state = GeneratorState::Pending;
        bounds
    }

    fn tick(&mut self, boundary: Option<Date>, include_last: bool) -> Tick {
        let bounds = match self.bounds {
            Some(b) => b,
            None => self.initialize(),
        };
        let Some(current) = self.current else {
            return Tick::Exhausted;
        };

        // A boundary past the end collapses into the end itself.
        let (boundary, include_last) = match boundary {
            Some(b) if b == bounds.last || !self.direction.reached(b, bounds.last) => {
                (b, include_last)
            }
            _ => (bounds.last, true),
        };

        match self.state {
            GeneratorState::Uninitialized | GeneratorState::Finished => Tick::Exhausted,
            GeneratorState::Pending => {
                if !include_last && self.direction.reached(current, boundary) {
                    return Tick::Stalled;
                }
                self.state = GeneratorState::Active;
                tracing::trace!(date = %current, "period");
                Tick::Produced
            }
            GeneratorState::Active => {
                if self.direction.reached(current, bounds.last) {
                    return self.finish(current);
                }
                if self.direction.reached(current, boundary) {
                    return Tick::Stalled;
                }
                let next = self.grouping.step(current, self.direction);
                // Saturated steps near the calendar limits can skip over the end.
                if next != bounds.last && self.direction.reached(next, bounds.last) {
                    return self.finish(current);
                }
                self.current = Some(next);
                if !include_last && self.direction.reached(next, boundary) {
                    self.state = GeneratorState::Pending;
                    tracing::debug!(boundary = %boundary, "stalled on boundary");
                    return Tick::Stalled;
                }
                tracing::trace!(date = %next, "period");
                Tick::Produced
            }
        }
    }

    fn finish(&mut self, last: Date) -> Tick {
        self.state = GeneratorState::Finished;
        tracing::debug!(last = %last, "period generation finished");
        Tick::Exhausted
    }
}

impl Iterator for PeriodGenerator {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.advance() {
            self.current
        } else {
            None
        }
    }
}

impl FusedIterator for PeriodGenerator {}
