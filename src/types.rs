//! Core types for the cron builder
//!
//! Error enum, result alias, and the symbolic weekday/month constants
//! accepted by the builder's day and month setters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Cron builder errors
///
/// Every error is raised at the point of misuse and leaves the builder's
/// prior state unchanged.
#[derive(Debug, Error)]
pub enum CronError {
    /// A field value, list member, range bound, or step start is outside
    /// the field's declared bounds
    #[error("{field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    /// A range's start exceeds its end
    #[error("{field} range start ({start}) must be <= end ({end})")]
    InvalidRange {
        field: &'static str,
        start: u32,
        end: u32,
    },

    /// A step interval of zero
    #[error("{field} interval must be positive")]
    InvalidInterval { field: &'static str },

    /// A conjunction setter was called before its prerequisite field was
    /// configured away from wildcard
    #[error("{required} must be set before calling {method}()")]
    ConjunctionWithoutAnchor {
        required: &'static str,
        method: &'static str,
    },
}

/// Weekday constants for day-of-week fields (0 = Sunday .. 6 = Saturday)
///
/// Setters take `impl Into<u32>`, so a raw integer in `0..=6` and a
/// `Weekday` are interchangeable:
///
/// ```
/// use cron_builder::{CronBuilder, Weekday};
///
/// let a = CronBuilder::new().on_dow(Weekday::Friday)?;
/// let b = CronBuilder::new().on_dow(5u32)?;
/// assert_eq!(a.render(), b.render());
/// # Ok::<(), cron_builder::CronError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Short alias for [`Weekday::Sunday`]
    pub const SUN: Weekday = Weekday::Sunday;
    /// Short alias for [`Weekday::Monday`]
    pub const MON: Weekday = Weekday::Monday;
    /// Short alias for [`Weekday::Tuesday`]
    pub const TUE: Weekday = Weekday::Tuesday;
    /// Short alias for [`Weekday::Wednesday`]
    pub const WED: Weekday = Weekday::Wednesday;
    /// Short alias for [`Weekday::Thursday`]
    pub const THU: Weekday = Weekday::Thursday;
    /// Short alias for [`Weekday::Friday`]
    pub const FRI: Weekday = Weekday::Friday;
    /// Short alias for [`Weekday::Saturday`]
    pub const SAT: Weekday = Weekday::Saturday;
}

impl From<Weekday> for u32 {
    fn from(day: Weekday) -> u32 {
        day as u32
    }
}

/// Month constants for month fields (1 = January .. 12 = December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Short alias for [`Month::January`]
    pub const JAN: Month = Month::January;
    /// Short alias for [`Month::February`]
    pub const FEB: Month = Month::February;
    /// Short alias for [`Month::March`]
    pub const MAR: Month = Month::March;
    /// Short alias for [`Month::April`]
    pub const APR: Month = Month::April;
    /// Short alias for [`Month::June`]
    pub const JUN: Month = Month::June;
    /// Short alias for [`Month::July`]
    pub const JUL: Month = Month::July;
    /// Short alias for [`Month::August`]
    pub const AUG: Month = Month::August;
    /// Short alias for [`Month::September`]
    pub const SEP: Month = Month::September;
    /// Short alias for [`Month::October`]
    pub const OCT: Month = Month::October;
    /// Short alias for [`Month::November`]
    pub const NOV: Month = Month::November;
    /// Short alias for [`Month::December`]
    pub const DEC: Month = Month::December;
}

impl From<Month> for u32 {
    fn from(month: Month) -> u32 {
        month as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_values() {
        assert_eq!(u32::from(Weekday::Sunday), 0);
        assert_eq!(u32::from(Weekday::Saturday), 6);
        assert_eq!(Weekday::MON, Weekday::Monday);
        assert_eq!(u32::from(Weekday::FRI), 5);
    }

    #[test]
    fn test_month_values() {
        assert_eq!(u32::from(Month::January), 1);
        assert_eq!(u32::from(Month::December), 12);
        assert_eq!(Month::JUN, Month::June);
    }

    #[test]
    fn test_error_display() {
        let err = CronError::ValueOutOfRange {
            field: "minute",
            min: 0,
            max: 59,
            value: 60,
        };
        assert_eq!(err.to_string(), "minute must be between 0 and 59, got 60");

        let err = CronError::ConjunctionWithoutAnchor {
            required: "day_of_month",
            method: "and_dow",
        };
        assert_eq!(
            err.to_string(),
            "day_of_month must be set before calling and_dow()"
        );
    }
}
