use crate::radius::ImpactRadius;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const VERY_HIGH_RISK_THRESHOLD: u8 = 70;
pub const HIGH_RISK_THRESHOLD: u8 = 50;
pub const MEDIUM_RISK_THRESHOLD: u8 = 30;

// ---------------------------------------------------------------------------
// AgentStrategy
// ---------------------------------------------------------------------------

/// Declared low → high so the derived `Ord` matches tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentStrategy {
    LowRisk,
    MediumRisk,
    HighRisk,
    VeryHighRisk,
}

impl AgentStrategy {
    pub fn all() -> &'static [AgentStrategy] {
        &[
            AgentStrategy::LowRisk,
            AgentStrategy::MediumRisk,
            AgentStrategy::HighRisk,
            AgentStrategy::VeryHighRisk,
        ]
    }

    /// Step function over the raw radius value. Lower bounds are inclusive.
    pub fn for_radius(radius: u8) -> Self {
        match radius {
            r if r >= VERY_HIGH_RISK_THRESHOLD => AgentStrategy::VeryHighRisk,
            r if r >= HIGH_RISK_THRESHOLD => AgentStrategy::HighRisk,
            r if r >= MEDIUM_RISK_THRESHOLD => AgentStrategy::MediumRisk,
            _ => AgentStrategy::LowRisk,
        }
    }

    pub fn min_agents(self) -> u8 {
        match self {
            AgentStrategy::VeryHighRisk => 8,
            AgentStrategy::HighRisk => 6,
            AgentStrategy::MediumRisk => 4,
            AgentStrategy::LowRisk => 0,
        }
    }

    /// 0 for low-risk up to 3 for very-high-risk.
    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentStrategy::VeryHighRisk => "very-high-risk",
            AgentStrategy::HighRisk => "high-risk",
            AgentStrategy::MediumRisk => "medium-risk",
            AgentStrategy::LowRisk => "low-risk",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            AgentStrategy::VeryHighRisk => {
                "Deploy at least 8 agents in parallel with dedicated security and review \
                 coverage; stage the change and verify each step before merging."
            }
            AgentStrategy::HighRisk => {
                "Deploy at least 6 agents with a dedicated reviewer and explicit test \
                 coverage for every affected module."
            }
            AgentStrategy::MediumRisk => {
                "Deploy at least 4 agents: split implementation, testing, and review \
                 across parallel work units."
            }
            AgentStrategy::LowRisk => {
                "Handle directly; parallel agents are optional for a change this contained."
            }
        }
    }
}

impl fmt::Display for AgentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentStrategy {
    type Err = crate::error::ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very-high-risk" => Ok(AgentStrategy::VeryHighRisk),
            "high-risk" => Ok(AgentStrategy::HighRisk),
            "medium-risk" => Ok(AgentStrategy::MediumRisk),
            "low-risk" => Ok(AgentStrategy::LowRisk),
            _ => Err(crate::error::ImpactError::InvalidStrategy(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub very_high_risk: u8,
    pub high_risk: u8,
    pub medium_risk: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            very_high_risk: VERY_HIGH_RISK_THRESHOLD,
            high_risk: HIGH_RISK_THRESHOLD,
            medium_risk: MEDIUM_RISK_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub strategy: AgentStrategy,
    pub min_agents: u8,
    pub thresholds: Thresholds,
}

pub fn resolve(radius: ImpactRadius) -> Resolution {
    let strategy = AgentStrategy::for_radius(radius.value());
    Resolution {
        strategy,
        min_agents: strategy.min_agents(),
        thresholds: Thresholds::default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
