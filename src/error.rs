//! Error types for the periodgen crate.

use crate::grouping::Direction;
use time::Date;

/// Error type for all fallible operations in the periodgen crate.
///
/// Only construction can fail; advancing a generator is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when the range bounds contradict the requested direction.
    #[error("start date {start} must not be {} end date {end}", wrong_side(.direction))]
    InvalidRange {
        /// Caller-supplied start of the range.
        start: Date,
        /// Caller-supplied end of the range.
        end: Date,
        /// Direction the generator was asked to walk.
        direction: Direction,
    },
}

fn wrong_side(direction: &Direction) -> &'static str {
    match direction {
        Direction::Forward => "after",
        Direction::Backward => "before",
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PeriodError>;
