use crate::error::Result;
use crate::generator::PeriodGenerator;
use crate::grouping::{Direction, Grouping};
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// User-facing generator options with sensible defaults and builder chaining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub grouping: Grouping,
    pub direction: Direction,
    #[serde(with = "weekday_name")]
    pub first_day_of_week: Weekday, // only used for Grouping::Week
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            grouping: Grouping::Day,
            direction: Direction::Forward,
            first_day_of_week: Weekday::Monday,
        }
    }
}

impl GeneratorOptions {
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
    pub fn backward(mut self, yes: bool) -> Self {
        self.direction = if yes { Direction::Backward } else { Direction::Forward };
        self
    }
    pub fn with_first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    /// Validate the range against the configured direction and create a generator.
    pub fn build(&self, start: Date, end: Date) -> Result<PeriodGenerator> {
        let generator = PeriodGenerator::new(start, end, self.grouping, self.direction)?
            .with_first_day_of_week(self.first_day_of_week);
        Ok(generator)
    }
}

// Weekdays travel as lowercase English names ("monday").
mod weekday_name {
    use crate::grouping::parse_weekday;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::Weekday;

    pub fn serialize<S: Serializer>(wd: &Weekday, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&wd.to_string().to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(d)?;
        parse_weekday(&raw).ok_or_else(|| D::Error::custom(format!("unknown weekday '{raw}'")))
    }
}
