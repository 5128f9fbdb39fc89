//! Field expression model
//!
//! A [`FieldExpr`] is the validated constraint held by one cron field:
//! wildcard, single value, value list, inclusive range, or step. Values are
//! validated against the owning field's bounds before an expression is
//! constructed, so an expression never needs to re-check them.

use serde::{Deserialize, Serialize};

/// A single cron field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldExpr {
    /// Matches every value in the field's range (`*`)
    Any,
    /// Matches exactly one value
    Value(u32),
    /// Matches any member of the list; order is preserved for rendering
    List(Vec<u32>),
    /// Matches `lo <= actual <= hi` (inclusive)
    Range(u32, u32),
    /// Matches every `interval`-th value; `start: None` is the wildcard
    /// start (`*/interval`), otherwise matching begins at `start`
    Step { start: Option<u32>, interval: u32 },
}

impl FieldExpr {
    /// Check whether a value satisfies this expression
    pub fn matches(&self, actual: u32) -> bool {
        match self {
            FieldExpr::Any => true,
            FieldExpr::Value(v) => actual == *v,
            FieldExpr::List(values) => values.contains(&actual),
            FieldExpr::Range(lo, hi) => *lo <= actual && actual <= *hi,
            FieldExpr::Step { start, interval } => match start {
                None => actual % interval == 0,
                Some(start) => actual >= *start && (actual - start) % interval == 0,
            },
        }
    }

    /// Render as canonical cron field text
    ///
    /// ```
    /// use cron_builder::FieldExpr;
    ///
    /// assert_eq!(FieldExpr::Any.render(), "*");
    /// assert_eq!(FieldExpr::Range(9, 17).render(), "9-17");
    /// assert_eq!(FieldExpr::Step { start: None, interval: 5 }.render(), "*/5");
    /// ```
    pub fn render(&self) -> String {
        match self {
            FieldExpr::Any => "*".to_string(),
            FieldExpr::Value(v) => v.to_string(),
            FieldExpr::List(values) => values
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(","),
            FieldExpr::Range(lo, hi) => format!("{}-{}", lo, hi),
            FieldExpr::Step { start, interval } => match start {
                None => format!("*/{}", interval),
                Some(start) => format!("{}/{}", start, interval),
            },
        }
    }

    /// Check whether this is the wildcard expression
    pub fn is_any(&self) -> bool {
        matches!(self, FieldExpr::Any)
    }
}

impl std::fmt::Display for FieldExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
