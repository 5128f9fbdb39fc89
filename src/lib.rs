//! Cron Builder - Programmatic cron expression construction
//!
//! Builds standard five-field cron expressions through a fluent, validated
//! API instead of hand-written cron syntax:
//! - Typed field expressions (wildcard, value, list, range, step)
//! - Per-field bounds validation at the point of misuse
//! - Day-of-month AND day-of-week conjunctions, evaluated programmatically,
//!   that cron syntax itself cannot express
//! - Mutable and immutable builder modes
//!
//! ## Quick Start
//!
//! ```
//! use cron_builder::{CronBuilder, Weekday};
//!
//! // "0,30 9-17 * * 1-5": every half hour during business hours, weekdays
//! let schedule = CronBuilder::new()
//!     .at_minutes([0, 30])?
//!     .hour_range(9, 17)?
//!     .on_weekdays()?;
//! assert_eq!(schedule.render(), "0,30 9-17 * * 1-5");
//!
//! // First Monday of the month: cron syntax ORs the two day fields, so the
//! // AND reading is recorded as a conjunction and checked via should_run()
//! let first_monday = CronBuilder::new()
//!     .at(9, 0)?
//!     .dom_range(1, 7)?
//!     .and_dow(Weekday::Monday)?;
//! assert_eq!(first_monday.render(), "0 9 1-7 * *");
//! # Ok::<(), cron_builder::CronError>(())
//! ```
//!
//! This crate only constructs and evaluates expressions; it does not
//! schedule or run anything, and it does not parse cron strings back into
//! the model.

mod builder;
mod expr;
mod field;
mod types;

pub use builder::{Conjunction, CronBuilder};
pub use expr::FieldExpr;
pub use field::Field;
pub use types::{CronError, Month, Result, Weekday};
