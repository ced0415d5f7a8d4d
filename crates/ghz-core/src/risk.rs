//! Seismic risk classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum magnitude for an event to count as significant.
pub const SIGNIFICANT_MAGNITUDE: f64 = 4.0;

/// Categorical risk level derived from significant-event counts.
///
/// Ordered: `Minimal < Low < Moderate < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a count of significant events in the observed window to a risk level.
///
/// Thresholds: 0 → Minimal, 1–3 → Low, 4–10 → Moderate, above 10 → High.
#[must_use]
pub const fn classify(significant_count: u32) -> RiskLevel {
    match significant_count {
        0 => RiskLevel::Minimal,
        1..=3 => RiskLevel::Low,
        4..=10 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    }
}
