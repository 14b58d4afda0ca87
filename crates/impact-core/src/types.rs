use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Risk,
    Complexity,
    Scope,
}

impl Dimension {
    pub fn all() -> &'static [Dimension] {
        &[Dimension::Risk, Dimension::Complexity, Dimension::Scope]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Risk => "risk",
            Dimension::Complexity => "complexity",
            Dimension::Scope => "scope",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = crate::error::ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "risk" => Ok(Dimension::Risk),
            "complexity" => Ok(Dimension::Complexity),
            // the JSON report calls scope "impact"
            "scope" | "impact" => Ok(Dimension::Scope),
            _ => Err(crate::error::ImpactError::InvalidDimension(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DimensionScore
// ---------------------------------------------------------------------------

/// A single 0-10 score. Values above 10 are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DimensionScore(u8);

impl DimensionScore {
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DimensionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ---------------------------------------------------------------------------
// Qualitative levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: DimensionScore) -> Self {
        match score.value() {
            8.. => RiskLevel::High,
            5..=7 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityLevel {
    High,
    Medium,
    Low,
}

impl ComplexityLevel {
    pub fn from_score(score: DimensionScore) -> Self {
        match score.value() {
            7.. => ComplexityLevel::High,
            4..=6 => ComplexityLevel::Medium,
            _ => ComplexityLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityLevel::High => "HIGH",
            ComplexityLevel::Medium => "MEDIUM",
            ComplexityLevel::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScopeLevel {
    Wide,
    Moderate,
    Narrow,
}

impl ScopeLevel {
    pub fn from_score(score: DimensionScore) -> Self {
        match score.value() {
            7.. => ScopeLevel::Wide,
            4..=6 => ScopeLevel::Moderate,
            _ => ScopeLevel::Narrow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScopeLevel::Wide => "WIDE",
            ScopeLevel::Moderate => "MODERATE",
            ScopeLevel::Narrow => "NARROW",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(RiskLevel, ComplexityLevel, ScopeLevel);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
