use crate::types::DimensionScore;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RISK_MULTIPLIER: u8 = 5;
pub const COMPLEXITY_MULTIPLIER: u8 = 3;
pub const SCOPE_MULTIPLIER: u8 = 2;

// ---------------------------------------------------------------------------
// Multipliers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multipliers {
    pub risk_multiplier: u8,
    pub complexity_multiplier: u8,
    pub scope_multiplier: u8,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            risk_multiplier: RISK_MULTIPLIER,
            complexity_multiplier: COMPLEXITY_MULTIPLIER,
            scope_multiplier: SCOPE_MULTIPLIER,
        }
    }
}

// ---------------------------------------------------------------------------
// ImpactRadius
// ---------------------------------------------------------------------------

/// Weighted sum of the three dimension scores, always in 0..=100.
///
/// Only constructed through [`radius`], so it can never drift from the scores
/// it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ImpactRadius(u8);

impl ImpactRadius {
    pub const MAX: u8 = 100;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ImpactRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub fn radius(
    risk: DimensionScore,
    complexity: DimensionScore,
    scope: DimensionScore,
) -> ImpactRadius {
    // 10*5 + 10*3 + 10*2 = 100, so u8 never overflows
    ImpactRadius(
        risk.value() * RISK_MULTIPLIER
            + complexity.value() * COMPLEXITY_MULTIPLIER
            + scope.value() * SCOPE_MULTIPLIER,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
