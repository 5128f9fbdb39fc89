//! Bounded cron field
//!
//! A [`Field`] is one of the five schedule slots: it owns the slot's
//! inclusive bounds, its name for error messages, and the current
//! [`FieldExpr`]. Setters validate first and store only on success, so a
//! failed call never changes the field.

use crate::expr::FieldExpr;
use crate::types::{CronError, Result};

/// A single cron field with bounds validation
#[derive(Debug, Clone)]
pub struct Field {
    min: u32,
    max: u32,
    name: &'static str,
    immutable: bool,
    expr: FieldExpr,
}

impl Field {
    /// Create a field in mutable mode (overwrite warnings enabled)
    pub fn new(min: u32, max: u32, name: &'static str) -> Self {
        debug_assert!(min <= max);
        Self {
            min,
            max,
            name,
            immutable: false,
            expr: FieldExpr::Any,
        }
    }

    /// Create a field in immutable mode (no overwrite warnings)
    pub fn immutable(min: u32, max: u32, name: &'static str) -> Self {
        Self {
            immutable: true,
            ..Self::new(min, max, name)
        }
    }

    fn validate(&self, value: u32) -> Result<()> {
        if value < self.min || value > self.max {
            return Err(CronError::ValueOutOfRange {
                field: self.name,
                min: self.min,
                max: self.max,
                value,
            });
        }
        Ok(())
    }

    /// Store a validated expression.
    ///
    /// In mutable mode, replacing a non-wildcard expression emits an
    /// advisory warning naming the field and both renderings. The warning
    /// never aborts the call.
    fn store(&mut self, expr: FieldExpr) {
        if !self.immutable && !self.expr.is_any() {
            tracing::warn!(
                "{} field overwritten: '{}' -> '{}'",
                self.name,
                self.expr,
                expr
            );
        }
        self.expr = expr;
    }

    /// Set a single value
    pub fn set_value(&mut self, value: u32) -> Result<()> {
        self.validate(value)?;
        self.store(FieldExpr::Value(value));
        Ok(())
    }

    /// Set a list of values (comma-separated in cron syntax)
    ///
    /// An empty list is permitted; it renders as the empty string and
    /// matches nothing.
    pub fn set_values(&mut self, values: &[u32]) -> Result<()> {
        for &value in values {
            self.validate(value)?;
        }
        self.store(FieldExpr::List(values.to_vec()));
        Ok(())
    }

    /// Set an inclusive range of values
    pub fn set_range(&mut self, start: u32, end: u32) -> Result<()> {
        self.validate(start)?;
        self.validate(end)?;
        if start > end {
            return Err(CronError::InvalidRange {
                field: self.name,
                start,
                end,
            });
        }
        self.store(FieldExpr::Range(start, end));
        Ok(())
    }

    /// Set a step interval; `start: None` means the wildcard start (`*/n`)
    pub fn set_interval(&mut self, interval: u32, start: Option<u32>) -> Result<()> {
        if interval == 0 {
            return Err(CronError::InvalidInterval { field: self.name });
        }
        if let Some(start) = start {
            self.validate(start)?;
        }
        self.store(FieldExpr::Step { start, interval });
        Ok(())
    }

    /// Reset to wildcard (`*`)
    pub fn set_any(&mut self) {
        self.store(FieldExpr::Any);
    }

    /// Check whether a value satisfies this field's expression
    pub fn matches(&self, actual: u32) -> bool {
        self.expr.matches(actual)
    }

    /// Check whether this field is still the wildcard
    pub fn is_any(&self) -> bool {
        self.expr.is_any()
    }

    /// The field's current expression
    pub fn expr(&self) -> &FieldExpr {
        &self.expr
    }

    /// The field's name as used in error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render the field's expression as cron field text
    pub fn render(&self) -> String {
        self.expr.render()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}
