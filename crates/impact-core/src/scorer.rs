use crate::registry::{PatternRegistry, COMPOUND_COMPLEXITY, COMPOUND_KEYWORD_THRESHOLD};
use crate::types::{Dimension, DimensionScore};
use serde::Serialize;

// ---------------------------------------------------------------------------
// DimensionAssessment (output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionAssessment {
    pub dimension: Dimension,
    pub score: DimensionScore,
    /// Tier of the first matching pattern; `None` when the default applied.
    pub matched_tier: Option<&'static str>,
    /// Labels of every pattern that matched, in evaluation order.
    pub factors: Vec<String>,
    /// True when the compound complexity floor raised the score.
    pub compounded: bool,
}

impl DimensionAssessment {
    pub fn is_default(&self) -> bool {
        self.matched_tier.is_none() && !self.compounded
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Score `text` on one dimension with the builtin registry.
pub fn score(text: &str, dimension: Dimension) -> DimensionScore {
    assess_dimension(PatternRegistry::builtin(), text, dimension).score
}

/// First-match scoring in registry priority order, plus factor collection.
pub fn assess_dimension(
    registry: &PatternRegistry,
    text: &str,
    dimension: Dimension,
) -> DimensionAssessment {
    let text = normalize(text);
    let reg = registry.dimension(dimension);

    let mut first: Option<(&'static str, DimensionScore)> = None;
    let mut factors: Vec<String> = Vec::new();
    for pattern in reg.patterns() {
        if !pattern.is_match(&text) {
            continue;
        }
        if first.is_none() {
            first = Some((pattern.tier, pattern.score));
        }
        if !factors.iter().any(|f| f == pattern.label) {
            factors.push(pattern.label.to_string());
        }
    }

    let (matched_tier, mut score) = match first {
        Some((tier, score)) => (Some(tier), score),
        None => (None, reg.default),
    };

    let mut compounded = false;
    if dimension == Dimension::Complexity && score.value() < COMPOUND_COMPLEXITY {
        let keywords = registry.structural_keywords(&text);
        if keywords.len() >= COMPOUND_KEYWORD_THRESHOLD {
            score = DimensionScore::new(COMPOUND_COMPLEXITY);
            compounded = true;
            factors.push(format!("multiple complex operations ({})", keywords.join(", ")));
        }
    }

    if factors.is_empty() {
        factors.push(format!("no {dimension} indicators matched; default applied"));
    }

    DimensionAssessment {
        dimension: reg.dimension,
        score,
        matched_tier,
        factors,
        compounded,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
