use crate::diag::{self, DiagnosticLog};
use crate::error::{ImpactError, Result};
use crate::radius::{radius, Multipliers};
use crate::registry::PatternRegistry;
use crate::report::{AssessmentResult, Reasoning, Scores, REPORT_VERSION};
use crate::scorer::{assess_dimension, DimensionAssessment};
use crate::strategy::resolve;
use crate::types::Dimension;

// ---------------------------------------------------------------------------
// Assessor
// ---------------------------------------------------------------------------

/// Runs the full pipeline: three dimension scores, radius, strategy, report.
pub struct Assessor<'a> {
    registry: &'a PatternRegistry,
    log: Option<&'a DiagnosticLog>,
}

impl<'a> Assessor<'a> {
    pub fn new(registry: &'a PatternRegistry) -> Self {
        Self {
            registry,
            log: None,
        }
    }

    pub fn with_log(mut self, log: &'a DiagnosticLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn assess(&self, task_description: &str) -> Result<AssessmentResult> {
        let task = task_description.trim();
        if task.is_empty() {
            if let Some(log) = self.log {
                log.error("rejected empty task description");
            }
            return Err(ImpactError::EmptyInput);
        }

        let risk = self.score(task, Dimension::Risk);
        let complexity = self.score(task, Dimension::Complexity);
        let scope = self.score(task, Dimension::Scope);

        let impact_radius = radius(risk.score, complexity.score, scope.score);
        let resolution = resolve(impact_radius);
        let reasoning = Reasoning::build(&risk, &complexity, &scope, &resolution);

        if let Some(log) = self.log {
            log.info(&format!(
                "assessed task: risk={} complexity={} scope={} radius={} strategy={} min_agents={}",
                risk.score,
                complexity.score,
                scope.score,
                impact_radius,
                resolution.strategy,
                resolution.min_agents
            ));
        }

        Ok(AssessmentResult {
            version: REPORT_VERSION.to_string(),
            timestamp: diag::timestamp(),
            task_description: task.to_string(),
            scores: Scores {
                risk_score: risk.score,
                complexity_score: complexity.score,
                impact_score: scope.score,
                impact_radius,
            },
            multipliers: Multipliers::default(),
            agent_strategy: resolution,
            reasoning,
        })
    }

    fn score(&self, task: &str, dimension: Dimension) -> DimensionAssessment {
        let a = assess_dimension(self.registry, task, dimension);
        if let Some(log) = self.log.filter(|l| l.debug_enabled()) {
            log.debug(&format!(
                "{dimension}: score={} tier={} compounded={} factors=[{}]",
                a.score,
                a.matched_tier.unwrap_or("default"),
                a.compounded,
                a.factors.join("; ")
            ));
        }
        a
    }
}

/// Assess with the builtin registry and no trace file.
pub fn assess(task_description: &str) -> Result<AssessmentResult> {
    Assessor::new(PatternRegistry::builtin()).assess(task_description)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
