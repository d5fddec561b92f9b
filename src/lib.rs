mod config;
mod date;
mod error;
mod generator;
mod grouping;
mod period;
mod util;

pub use crate::config::GeneratorOptions;
pub use crate::date::{add_days, parse_date, YearMonth};
pub use crate::error::{PeriodError, Result};
pub use crate::generator::{Advance, GeneratorState, PeriodGenerator};
pub use crate::grouping::{parse_weekday, Direction, Grouping};
pub use crate::period::Period;

// Expose tracing setup so binaries can import it from the crate root.
pub use crate::util::init_tracing_once;

// Re-export the date primitive so callers don't need a direct `time` dependency.
pub use time::{Date, Weekday};
