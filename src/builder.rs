//! Fluent cron schedule builder
//!
//! Composes the five cron fields (minute, hour, day of month, month, day of
//! week) behind a chainable, validated API, and evaluates the non-standard
//! day-of-month/day-of-week conjunction that cron syntax itself cannot
//! express.
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```

use crate::field::Field;
use crate::types::{CronError, Result};
use crate::{Month, Weekday};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// An out-of-band AND constraint between day of month and day of week
///
/// Standard cron ORs the two day fields when both are restricted. A
/// conjunction records the caller's intent for the opposite (AND) check,
/// anchored on one side: `Dow(d)` requires the weekday to equal `d` in
/// addition to the day-of-month constraint, `Dom(d)` requires the day of
/// month to equal `d` in addition to the day-of-week constraint. It is only
/// ever consulted by [`CronBuilder::should_run`], never by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    /// Day-of-month field AND weekday equals the given value
    Dow(u32),
    /// Day-of-week field AND day of month equals the given value
    Dom(u32),
}

/// A fluent builder for five-field cron expressions
///
/// # Examples
///
/// ```
/// use cron_builder::CronBuilder;
///
/// // Every 30 minutes during business hours on weekdays
/// let schedule = CronBuilder::new()
///     .at_minutes([0, 30])?
///     .hour_range(9, 17)?
///     .on_weekdays()?;
/// assert_eq!(schedule.render(), "0,30 9-17 * * 1-5");
/// # Ok::<(), cron_builder::CronError>(())
/// ```
///
/// Setters consume the builder and return it, so chains read left to
/// right and a builder another caller still holds can never be changed
/// behind its back. [`CronBuilder::new`] builds in mutable mode, where
/// replacing an already-configured field logs an advisory warning;
/// [`CronBuilder::immutable`] builds in immutable mode, where replacement
/// never warns and [`CronBuilder::branch`] fans independent variants out
/// from a shared base.
#[derive(Debug, Clone)]
pub struct CronBuilder {
    minute: Field,
    hour: Field,
    day_of_month: Field,
    month: Field,
    day_of_week: Field,
    conjunction: Option<Conjunction>,
    immutable: bool,
}

impl CronBuilder {
    /// Create a builder in mutable mode; all fields start as wildcards
    pub fn new() -> Self {
        Self {
            minute: Field::new(0, 59, "minute"),
            hour: Field::new(0, 23, "hour"),
            day_of_month: Field::new(1, 31, "day_of_month"),
            month: Field::new(1, 12, "month"),
            day_of_week: Field::new(0, 6, "day_of_week"),
            conjunction: None,
            immutable: false,
        }
    }

    /// Create a builder in immutable mode
    ///
    /// Immutable-mode setters never emit overwrite warnings: every call
    /// produces a fresh value with no prior state to clobber. Use
    /// [`branch`](Self::branch) to derive variants from a common base:
    ///
    /// ```
    /// use cron_builder::CronBuilder;
    ///
    /// let base = CronBuilder::immutable().at(9, 0)?;
    /// let weekday = base.branch().on_weekdays()?;
    /// let weekend = base.branch().on_weekends()?;
    /// assert_eq!(base.render(), "0 9 * * *");
    /// assert_eq!(weekday.render(), "0 9 * * 1-5");
    /// assert_eq!(weekend.render(), "0 9 * * 0,6");
    /// # Ok::<(), cron_builder::CronError>(())
    /// ```
    pub fn immutable() -> Self {
        Self {
            minute: Field::immutable(0, 59, "minute"),
            hour: Field::immutable(0, 23, "hour"),
            day_of_month: Field::immutable(1, 31, "day_of_month"),
            month: Field::immutable(1, 12, "month"),
            day_of_week: Field::immutable(0, 6, "day_of_week"),
            conjunction: None,
            immutable: true,
        }
    }

    /// An independent copy to configure separately, leaving `self` untouched
    pub fn branch(&self) -> Self {
        self.clone()
    }

    // ------------------------------------------------------------------
    // Minute
    // ------------------------------------------------------------------

    /// Run at a specific minute
    pub fn at_minute(mut self, minute: u32) -> Result<Self> {
        self.minute.set_value(minute)?;
        Ok(self)
    }

    /// Run at each of the given minutes
    pub fn at_minutes<I: IntoIterator<Item = u32>>(mut self, minutes: I) -> Result<Self> {
        let minutes: Vec<u32> = minutes.into_iter().collect();
        self.minute.set_values(&minutes)?;
        Ok(self)
    }

    /// Run every `interval` minutes (`*/interval`)
    pub fn every_minutes(mut self, interval: u32) -> Result<Self> {
        self.minute.set_interval(interval, None)?;
        Ok(self)
    }

    /// Run during an inclusive minute range
    pub fn minute_range(mut self, start: u32, end: u32) -> Result<Self> {
        self.minute.set_range(start, end)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Hour
    // ------------------------------------------------------------------

    /// Run at a specific hour
    pub fn at_hour(mut self, hour: u32) -> Result<Self> {
        self.hour.set_value(hour)?;
        Ok(self)
    }

    /// Run at each of the given hours
    pub fn at_hours<I: IntoIterator<Item = u32>>(mut self, hours: I) -> Result<Self> {
        let hours: Vec<u32> = hours.into_iter().collect();
        self.hour.set_values(&hours)?;
        Ok(self)
    }

    /// Run every `interval` hours (`*/interval`)
    pub fn every_hours(mut self, interval: u32) -> Result<Self> {
        self.hour.set_interval(interval, None)?;
        Ok(self)
    }

    /// Run during an inclusive hour range
    pub fn hour_range(mut self, start: u32, end: u32) -> Result<Self> {
        self.hour.set_range(start, end)?;
        Ok(self)
    }

    /// Run at a specific time of day
    pub fn at(self, hour: u32, minute: u32) -> Result<Self> {
        self.at_hour(hour)?.at_minute(minute)
    }

    // ------------------------------------------------------------------
    // Day of month
    // ------------------------------------------------------------------

    /// Run on a specific day of the month
    pub fn on_dom(mut self, day: u32) -> Result<Self> {
        self.day_of_month.set_value(day)?;
        Ok(self)
    }

    /// Run on each of the given days of the month
    pub fn on_doms<I: IntoIterator<Item = u32>>(mut self, days: I) -> Result<Self> {
        let days: Vec<u32> = days.into_iter().collect();
        self.day_of_month.set_values(&days)?;
        Ok(self)
    }

    /// Run during an inclusive day-of-month range
    pub fn dom_range(mut self, start: u32, end: u32) -> Result<Self> {
        self.day_of_month.set_range(start, end)?;
        Ok(self)
    }

    /// Alias for [`on_dom`](Self::on_dom)
    pub fn on_day_of_month(self, day: u32) -> Result<Self> {
        self.on_dom(day)
    }

    /// Alias for [`on_doms`](Self::on_doms)
    pub fn on_days_of_month<I: IntoIterator<Item = u32>>(self, days: I) -> Result<Self> {
        self.on_doms(days)
    }

    /// Alias for [`dom_range`](Self::dom_range)
    pub fn day_of_month_range(self, start: u32, end: u32) -> Result<Self> {
        self.dom_range(start, end)
    }

    // ------------------------------------------------------------------
    // Month
    // ------------------------------------------------------------------

    /// Run in a specific month; accepts a [`Month`] or a raw `1..=12` value
    pub fn in_month(mut self, month: impl Into<u32>) -> Result<Self> {
        self.month.set_value(month.into())?;
        Ok(self)
    }

    /// Run in each of the given months
    pub fn in_months<I, M>(mut self, months: I) -> Result<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<u32>,
    {
        let months: Vec<u32> = months.into_iter().map(Into::into).collect();
        self.month.set_values(&months)?;
        Ok(self)
    }

    /// Run during an inclusive month range
    pub fn month_range(mut self, start: impl Into<u32>, end: impl Into<u32>) -> Result<Self> {
        self.month.set_range(start.into(), end.into())?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Day of week
    // ------------------------------------------------------------------

    /// Run on a specific weekday; accepts a [`Weekday`] or a raw `0..=6`
    /// value (0 = Sunday)
    pub fn on_dow(mut self, day: impl Into<u32>) -> Result<Self> {
        self.day_of_week.set_value(day.into())?;
        Ok(self)
    }

    /// Run on each of the given weekdays
    pub fn on_dows<I, D>(mut self, days: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<u32>,
    {
        let days: Vec<u32> = days.into_iter().map(Into::into).collect();
        self.day_of_week.set_values(&days)?;
        Ok(self)
    }

    /// Run Monday through Friday (`1-5`)
    pub fn on_weekdays(mut self) -> Result<Self> {
        self.day_of_week
            .set_range(Weekday::Monday.into(), Weekday::Friday.into())?;
        Ok(self)
    }

    /// Run Saturday and Sunday (`0,6`)
    pub fn on_weekends(mut self) -> Result<Self> {
        self.day_of_week
            .set_values(&[Weekday::Sunday.into(), Weekday::Saturday.into()])?;
        Ok(self)
    }

    /// Run during an inclusive weekday range
    pub fn dow_range(mut self, start: impl Into<u32>, end: impl Into<u32>) -> Result<Self> {
        self.day_of_week.set_range(start.into(), end.into())?;
        Ok(self)
    }

    /// Alias for [`on_dow`](Self::on_dow)
    pub fn on_day(self, day: impl Into<u32>) -> Result<Self> {
        self.on_dow(day)
    }

    /// Alias for [`on_dows`](Self::on_dows)
    pub fn on_days<I, D>(self, days: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<u32>,
    {
        self.on_dows(days)
    }

    /// Alias for [`dow_range`](Self::dow_range)
    pub fn day_of_week_range(self, start: impl Into<u32>, end: impl Into<u32>) -> Result<Self> {
        self.dow_range(start, end)
    }

    // ------------------------------------------------------------------
    // Convenience combinators
    // ------------------------------------------------------------------

    /// Run once an hour at the given minute
    pub fn hourly(self, minute: u32) -> Result<Self> {
        self.at_minute(minute)
    }

    /// Run once a day at the given time
    pub fn daily(self, hour: u32, minute: u32) -> Result<Self> {
        self.at(hour, minute)
    }

    /// Run once a week, Monday at 00:00
    pub fn weekly(self) -> Result<Self> {
        self.weekly_on(Weekday::Monday, 0, 0)
    }

    /// Run once a week on the given weekday and time
    pub fn weekly_on(self, day: impl Into<u32>, hour: u32, minute: u32) -> Result<Self> {
        self.at(hour, minute)?.on_dow(day)
    }

    /// Run once a month, on the 1st at 00:00
    pub fn monthly(self) -> Result<Self> {
        self.monthly_on(1, 0, 0)
    }

    /// Run once a month on the given day and time
    pub fn monthly_on(self, day: u32, hour: u32, minute: u32) -> Result<Self> {
        self.at(hour, minute)?.on_dom(day)
    }

    /// Run once a year, January 1st at 00:00
    pub fn yearly(self) -> Result<Self> {
        self.yearly_on(Month::January, 1, 0, 0)
    }

    /// Run once a year on the given month, day, and time
    pub fn yearly_on(
        self,
        month: impl Into<u32>,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self> {
        self.at(hour, minute)?.on_dom(day)?.in_month(month)
    }

    // ------------------------------------------------------------------
    // Conjunctions
    // ------------------------------------------------------------------

    /// Additionally require the weekday to equal `day` when the schedule is
    /// evaluated through [`should_run`](Self::should_run)
    ///
    /// Cron syntax ORs a restricted day-of-month with a restricted
    /// day-of-week; a conjunction records the AND reading instead, which is
    /// what patterns like "the first Monday of the month" need. The
    /// rendered expression cannot carry this constraint, so a warning is
    /// logged as a reminder that only `should_run` honors it.
    ///
    /// Fails unless day-of-month has already been configured away from the
    /// wildcard.
    pub fn and_dow(mut self, day: impl Into<u32>) -> Result<Self> {
        if self.day_of_month.is_any() {
            return Err(CronError::ConjunctionWithoutAnchor {
                required: "day_of_month",
                method: "and_dow",
            });
        }
        let day = day.into();
        tracing::warn!(
            "conjunction created: day_of_month AND day_of_week={}; \
             the rendered expression fires on day_of_month alone, call should_run() to check both",
            day
        );
        self.conjunction = Some(Conjunction::Dow(day));
        Ok(self)
    }

    /// Additionally require the day of month to equal `day` when the
    /// schedule is evaluated through [`should_run`](Self::should_run)
    ///
    /// Counterpart of [`and_dow`](Self::and_dow); fails unless day-of-week
    /// has already been configured away from the wildcard.
    pub fn and_dom(mut self, day: u32) -> Result<Self> {
        if self.day_of_week.is_any() {
            return Err(CronError::ConjunctionWithoutAnchor {
                required: "day_of_week",
                method: "and_dom",
            });
        }
        tracing::warn!(
            "conjunction created: day_of_week AND day_of_month={}; \
             the rendered expression fires on day_of_week alone, call should_run() to check both",
            day
        );
        self.conjunction = Some(Conjunction::Dom(day));
        Ok(self)
    }

    /// Alias for [`and_dow`](Self::and_dow)
    pub fn and_day(self, day: impl Into<u32>) -> Result<Self> {
        self.and_dow(day)
    }

    /// Alias for [`and_dom`](Self::and_dom)
    pub fn and_day_of_month(self, day: u32) -> Result<Self> {
        self.and_dom(day)
    }

    // ------------------------------------------------------------------
    // Evaluation and rendering
    // ------------------------------------------------------------------

    /// Evaluate the conjunction against a date
    ///
    /// With no conjunction recorded this is always `true`; the rendered
    /// expression already says everything there is to say. With a
    /// conjunction, both the anchored field's own constraint and the exact
    /// day equality must hold:
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cron_builder::{CronBuilder, Weekday};
    ///
    /// // First Monday of the month
    /// let schedule = CronBuilder::new()
    ///     .dom_range(1, 7)?
    ///     .and_dow(Weekday::Monday)?;
    ///
    /// let first_monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let later_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    /// assert!(schedule.should_run(&first_monday));
    /// assert!(!schedule.should_run(&later_monday));
    /// # Ok::<(), cron_builder::CronError>(())
    /// ```
    ///
    /// The date carries its own zone; no conversion is applied beyond
    /// mapping the weekday to the Sunday = 0 domain.
    pub fn should_run<D: Datelike>(&self, at: &D) -> bool {
        let Some(conjunction) = self.conjunction else {
            return true;
        };

        let weekday = at.weekday().num_days_from_sunday();
        match conjunction {
            Conjunction::Dow(day) => self.day_of_month.matches(at.day()) && weekday == day,
            Conjunction::Dom(day) => self.day_of_week.matches(weekday) && at.day() == day,
        }
    }

    /// Evaluate the conjunction against the current local time
    pub fn should_run_now(&self) -> bool {
        self.should_run(&chrono::Local::now())
    }

    /// Render the five-field cron expression
    pub fn render(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The minute field
    pub fn minute(&self) -> &Field {
        &self.minute
    }

    /// The hour field
    pub fn hour(&self) -> &Field {
        &self.hour
    }

    /// The day-of-month field
    pub fn day_of_month(&self) -> &Field {
        &self.day_of_month
    }

    /// The month field
    pub fn month(&self) -> &Field {
        &self.month
    }

    /// The day-of-week field
    pub fn day_of_week(&self) -> &Field {
        &self.day_of_week
    }

    /// The recorded conjunction, if any
    pub fn conjunction(&self) -> Option<Conjunction> {
        self.conjunction
    }

    /// Whether this builder was created in immutable mode
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }
}

impl Default for CronBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CronBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
