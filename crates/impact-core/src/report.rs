use crate::radius::{ImpactRadius, Multipliers};
use crate::scorer::DimensionAssessment;
use crate::strategy::Resolution;
use crate::types::{ComplexityLevel, DimensionScore, RiskLevel, ScopeLevel};
use serde::Serialize;

pub const REPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub risk_score: DimensionScore,
    pub complexity_score: DimensionScore,
    /// Scope, reported under its historical name.
    pub impact_score: DimensionScore,
    pub impact_radius: ImpactRadius,
}

// ---------------------------------------------------------------------------
// Reasoning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reasoning {
    pub risk_level: RiskLevel,
    pub complexity_level: ComplexityLevel,
    pub impact_level: ScopeLevel,
    pub recommendation: String,
    pub risk_factors: Vec<String>,
    pub complexity_factors: Vec<String>,
    pub impact_factors: Vec<String>,
}

impl Reasoning {
    /// Levels come from the dimension scores alone, never from the radius.
    pub fn build(
        risk: &DimensionAssessment,
        complexity: &DimensionAssessment,
        scope: &DimensionAssessment,
        resolution: &Resolution,
    ) -> Self {
        Self {
            risk_level: RiskLevel::from_score(risk.score),
            complexity_level: ComplexityLevel::from_score(complexity.score),
            impact_level: ScopeLevel::from_score(scope.score),
            recommendation: resolution.strategy.recommendation().to_string(),
            risk_factors: risk.factors.clone(),
            complexity_factors: complexity.factors.clone(),
            impact_factors: scope.factors.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// AssessmentResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub version: String,
    /// UTC, RFC 3339 with a `Z` suffix.
    pub timestamp: String,
    pub task_description: String,
    pub scores: Scores,
    pub multipliers: Multipliers,
    pub agent_strategy: Resolution,
    pub reasoning: Reasoning,
}

impl AssessmentResult {
    /// Equal in everything but the timestamp.
    pub fn same_outcome(&self, other: &AssessmentResult) -> bool {
        self.task_description == other.task_description
            && self.scores == other.scores
            && self.multipliers == other.multipliers
            && self.agent_strategy == other.agent_strategy
            && self.reasoning == other.reasoning
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Multi-line report for terminals.
    pub fn render_text(&self) -> String {
        let s = &self.scores;
        let r = &self.reasoning;
        let a = &self.agent_strategy;
        let mut out = String::new();
        out.push_str("Impact Radius Assessment\n");
        out.push_str("========================\n");
        out.push_str(&format!("Task:          {}\n", self.task_description));
        out.push_str(&format!("Assessed at:   {}\n\n", self.timestamp));
        out.push_str(&format!(
            "Risk:          {:>2}/10  {}\n",
            s.risk_score, r.risk_level
        ));
        out.push_str(&format!(
            "Complexity:    {:>2}/10  {}\n",
            s.complexity_score, r.complexity_level
        ));
        out.push_str(&format!(
            "Scope:         {:>2}/10  {}\n",
            s.impact_score, r.impact_level
        ));
        out.push_str(&format!(
            "Impact radius: {:>3}/100  (risk x{} + complexity x{} + scope x{})\n\n",
            s.impact_radius,
            self.multipliers.risk_multiplier,
            self.multipliers.complexity_multiplier,
            self.multipliers.scope_multiplier,
        ));
        out.push_str(&format!(
            "Strategy:      {} (minimum {} agents)\n",
            a.strategy, a.min_agents
        ));
        out.push_str(&format!("Recommendation: {}\n", r.recommendation));

        for (title, factors) in [
            ("Risk factors", &r.risk_factors),
            ("Complexity factors", &r.complexity_factors),
            ("Scope factors", &r.impact_factors),
        ] {
            out.push_str(&format!("\n{title}:\n"));
            for f in factors {
                out.push_str(&format!("  - {f}\n"));
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
