//! Risk classification enums.
//!
//! `RiskLevel` serializes as the upper-case names used on the wire and in the
//! persisted watchlist (`"LOW"`, `"MEDIUM"`, `"HIGH"`). Parsing is
//! case-insensitive so CLI input like `--filter high` works.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Coarse classification of close-approach danger.
///
/// Ordered from least to most severe so `max()`/sorting behave naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "unknown risk level '{other}' (expected low, medium or high)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// RiskFilter
// ---------------------------------------------------------------------------

/// Dashboard filter: everything, or a single risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RiskFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    /// Whether an object with `level` passes this filter.
    #[must_use]
    pub fn matches(self, level: RiskLevel) -> bool {
        match self {
            Self::All => true,
            Self::Level(wanted) => wanted == level,
        }
    }
}

impl fmt::Display for RiskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Level(level) => f.write_str(&level.as_str().to_ascii_lowercase()),
        }
    }
}

impl FromStr for RiskFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") || s.trim().is_empty() {
            return Ok(Self::All);
        }
        s.parse::<RiskLevel>().map(Self::Level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_serializes_upper_case() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        let back: RiskLevel = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(back, RiskLevel::High);
    }

    #[test]
    fn risk_level_rejects_lower_case_on_the_wire() {
        assert!(serde_json::from_str::<RiskLevel>("\"high\"").is_err());
    }

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("High".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!(" low ".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn risk_levels_are_ordered_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn filter_parsing_and_matching() {
        assert_eq!("all".parse::<RiskFilter>().unwrap(), RiskFilter::All);
        let high: RiskFilter = "high".parse().unwrap();
        assert_eq!(high, RiskFilter::Level(RiskLevel::High));
        assert!(high.matches(RiskLevel::High));
        assert!(!high.matches(RiskLevel::Low));
        assert!(RiskFilter::All.matches(RiskLevel::Low));
        assert_eq!(high.to_string(), "high");
    }
}
