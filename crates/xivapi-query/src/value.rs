//! Filter values and game-version strings.
//!
//! The [`Value`] enum covers the four value kinds the query grammar accepts
//! and knows how to render itself as a query literal. [`Version`] is the
//! string form of a game version, built from either text or a number.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value compared against a sheet field in a [`Filter`](crate::Filter).
///
/// # Examples
///
/// ```
/// use xivapi_query::Value;
///
/// assert_eq!(Value::from("Steak").to_query_literal(), "\"Steak\"");
/// assert_eq!(Value::from(false).to_query_literal(), "false");
/// assert_eq!(Value::from(12).to_query_literal(), "12");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
}

impl Value {
    /// Renders the value as it appears on the right-hand side of a filter token.
    ///
    /// Strings are wrapped in double quotes and every inner `"` becomes `%22`.
    /// No other character is escaped here; the outer URL-encoding pass makes the
    /// result transport-safe.
    pub fn to_query_literal(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::String(s) => format!("\"{}\"", s.replace('"', "%22")),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_literal())
    }
}

/// Formats a float in shortest round-trip form, keeping `.0` on integral values.
pub(crate) fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Re-reads an `f32` through its own shortest decimal form so that `7.2_f32`
/// stays `7.2` instead of widening to `7.199999809265137`.
fn widen_f32(value: f32) -> f64 {
    value
        .to_string()
        .parse()
        .unwrap_or_else(|_| f64::from(value))
}

// ── From implementations ───────────────────────────────────────────────

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(widen_f32(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// A game version such as `7.2`, stored in the string form sent on the wire.
///
/// Numbers are coerced to their decimal string and never quoted, so
/// `Version::from(7.2)` and `Version::from("7.2")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Returns the version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the version string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for Version {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<f64> for Version {
    fn from(v: f64) -> Self {
        Self(format_float(v))
    }
}

impl From<f32> for Version {
    fn from(v: f32) -> Self {
        Self(format_float(widen_f32(v)))
    }
}

impl From<u32> for Version {
    fn from(v: u32) -> Self {
        Self(v.to_string())
    }
}
