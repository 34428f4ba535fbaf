use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// How a fallible sum behaves when the result does not fit in an `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's complement wraparound, same as the native `+` in release builds.
    #[default]
    Wrap,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturate,
    /// Report the overflow as an [`OverflowError`].
    Checked,
}

impl OverflowPolicy {
    pub const ALL: [OverflowPolicy; 3] = [Self::Wrap, Self::Saturate, Self::Checked];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Saturate => "saturate",
            Self::Checked => "checked",
        }
    }

    pub fn apply(self, a: i32, b: i32) -> Result<i32, OverflowError> {
        match self {
            Self::Wrap => Ok(a.wrapping_add(b)),
            Self::Saturate => Ok(a.saturating_add(b)),
            Self::Checked => a.checked_add(b).ok_or(OverflowError { a, b }),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("integer overflow adding {a} and {b}")]
pub struct OverflowError {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown overflow policy '{0}', expected one of: wrap, saturate, checked")]
pub struct ParsePolicyError(pub String);
