//! Pattern tables for the three scoring dimensions.
//!
//! Each dimension lists its tiers in an explicit priority order. The scorer
//! walks that order and stops at the first tier with a matching pattern, so
//! reordering a `priority_order()` slice changes classification results.

use crate::types::{Dimension, DimensionScore};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Risk applied when no risk pattern matches.
pub const DEFAULT_RISK: u8 = 3;
/// Complexity applied when no complexity pattern matches.
pub const DEFAULT_COMPLEXITY: u8 = 4;
/// Scope applied when no scope pattern matches.
pub const DEFAULT_SCOPE: u8 = 4;

/// Complexity floor applied when several structural keywords co-occur.
pub const COMPOUND_COMPLEXITY: u8 = 7;
/// Distinct structural keywords needed before the floor applies.
pub const COMPOUND_KEYWORD_THRESHOLD: usize = 2;

pub fn default_score(dimension: Dimension) -> DimensionScore {
    match dimension {
        Dimension::Risk => DimensionScore::new(DEFAULT_RISK),
        Dimension::Complexity => DimensionScore::new(DEFAULT_COMPLEXITY),
        Dimension::Scope => DimensionScore::new(DEFAULT_SCOPE),
    }
}

// ---------------------------------------------------------------------------
// Tier ordering
// ---------------------------------------------------------------------------

/// (regex source, factor label)
type PatternSource = (&'static str, &'static str);

pub trait TierOrder: Copy + 'static {
    /// Tiers in the order the scorer must evaluate them.
    fn priority_order() -> &'static [Self];
    fn score(self) -> u8;
    fn name(self) -> &'static str;
    fn patterns(self) -> &'static [PatternSource];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Critical,
    High,
    Elevated,
    Moderate,
    Minimal,
}

impl TierOrder for RiskTier {
    fn priority_order() -> &'static [Self] {
        &[
            RiskTier::Critical,
            RiskTier::High,
            RiskTier::Elevated,
            RiskTier::Moderate,
            RiskTier::Minimal,
        ]
    }

    fn score(self) -> u8 {
        match self {
            RiskTier::Critical => 10,
            RiskTier::High => 8,
            RiskTier::Elevated => 6,
            RiskTier::Moderate => 4,
            RiskTier::Minimal => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::High => "high",
            RiskTier::Elevated => "elevated",
            RiskTier::Moderate => "moderate",
            RiskTier::Minimal => "minimal",
        }
    }

    fn patterns(self) -> &'static [PatternSource] {
        match self {
            RiskTier::Critical => &[
                (
                    r"\bsecur(e|ed|es|ing|ity)\b|vulnerab|\bcve\b|exploit|\bbreach",
                    "security exposure",
                ),
                (
                    r"\bauth(n|z|entication|orization)?\b|credential|password|\bsecrets?\b|\btokens?\b|\bencrypt|\bpermissions?\b",
                    "authentication or secrets handling",
                ),
                (
                    r"injection|\bxss\b|\bcsrf\b|\brce\b",
                    "injection-class attack surface",
                ),
            ],
            RiskTier::High => &[
                (
                    r"\bproduction\b|\bprod\b|\bdeploy|\bhotfix|\boutage",
                    "production-facing change",
                ),
                (
                    r"database|\bschema\b|\bmigrat|data loss|drop table|\bdelete\b|\bpurge",
                    "persistent data at stake",
                ),
                (r"payment|billing|invoice|checkout", "payments or billing"),
            ],
            RiskTier::Elevated => &[
                (
                    r"\bapi\b|breaking change|backward compat|public interface|\bcontract\b",
                    "public interface change",
                ),
                (r"dependenc|\bupgrade", "dependency change"),
                (
                    r"concurren|race condition|deadlock|\bthread|\basync\b|performance|\bcach",
                    "runtime behavior change",
                ),
            ],
            RiskTier::Moderate => &[
                (
                    r"\bfeature\b|\bimplement|\bendpoint|\brefactor|\blogic\b",
                    "functional change",
                ),
                (r"\bbug\b|\bregression\b|error handling", "behavioral bug"),
            ],
            RiskTier::Minimal => &[
                (r"\btypo|\bspelling|\bgrammar", "text correction"),
                (
                    r"readme|\bdocs?\b|documentation|changelog|\bcomments?\b",
                    "documentation",
                ),
                (
                    r"\bformat(ting)?\b|whitespace|\blint|\bstyle\b|\brename\b",
                    "cosmetic change",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityTier {
    Extreme,
    High,
    Structural,
    Moderate,
    Minor,
    Trivial,
}

impl TierOrder for ComplexityTier {
    fn priority_order() -> &'static [Self] {
        &[
            ComplexityTier::Extreme,
            ComplexityTier::High,
            ComplexityTier::Structural,
            ComplexityTier::Moderate,
            ComplexityTier::Minor,
            ComplexityTier::Trivial,
        ]
    }

    fn score(self) -> u8 {
        match self {
            ComplexityTier::Extreme => 9,
            ComplexityTier::High => 8,
            ComplexityTier::Structural => 6,
            ComplexityTier::Moderate => 4,
            ComplexityTier::Minor => 2,
            ComplexityTier::Trivial => 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ComplexityTier::Extreme => "extreme",
            ComplexityTier::High => "high",
            ComplexityTier::Structural => "structural",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::Minor => "minor",
            ComplexityTier::Trivial => "trivial",
        }
    }

    fn patterns(self) -> &'static [PatternSource] {
        match self {
            ComplexityTier::Extreme => &[(
                r"\brewrit|from scratch|distributed|microservice|\bshard|\bconsensus",
                "large-scale engineering",
            )],
            ComplexityTier::High => &[(
                r"\boverhaul|\bre-?architect|concurren|multi-?thread|\bparallel|state machine",
                "intricate control flow",
            )],
            ComplexityTier::Structural => &[(
                r"\brefactor|\bmigrat|\bintegrat|\bredesign|\brestructur|\barchitect",
                "structural change",
            )],
            ComplexityTier::Moderate => &[(
                r"\bfeature\b|\bimplement|\badd\b|\bendpoint|\bmodule|\bcomponent|\bupdate\b|\bextend",
                "incremental change",
            )],
            ComplexityTier::Minor => &[(
                r"\bbug\b|\btweak|\badjust|\bconfig|\bsmall\b|\bminor\b|\bbump\b",
                "small targeted fix",
            )],
            ComplexityTier::Trivial => &[(
                r"\btypo|\bspelling|readme|\bcomments?\b|whitespace|\brename\b|\bdocs?\b|documentation",
                "trivial edit",
            )],
        }
    }
}

/// Scope tiers. Documentation-only sits between the wide tiers and the
/// single-module tier, so a wide keyword still wins over "readme".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeTier {
    VeryHigh,
    High,
    DocsOnly,
    Medium,
}

impl TierOrder for ScopeTier {
    fn priority_order() -> &'static [Self] {
        &[
            ScopeTier::VeryHigh,
            ScopeTier::High,
            ScopeTier::DocsOnly,
            ScopeTier::Medium,
        ]
    }

    fn score(self) -> u8 {
        match self {
            ScopeTier::VeryHigh => 10,
            ScopeTier::High => 7,
            ScopeTier::DocsOnly => 1,
            ScopeTier::Medium => 4,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ScopeTier::VeryHigh => "very_high",
            ScopeTier::High => "high",
            ScopeTier::DocsOnly => "docs_only",
            ScopeTier::Medium => "medium",
        }
    }

    fn patterns(self) -> &'static [PatternSource] {
        match self {
            ScopeTier::VeryHigh => &[(
                r"\bglobal|system-?wide|\bentire\b|across the (codebase|system|project)|\beverywhere\b|\ball (modules|services|files|components)\b|monorepo|\barchitecture|\binfrastructure|\bframework",
                "system-wide reach",
            )],
            ScopeTier::High => &[(
                r"\bmultiple\b|\bseveral\b|cross-(module|service|team)|\bshared\b|\bcore\b|\bapi\b|database|\bschema\b|\bpublic\b",
                "multi-module reach",
            )],
            ScopeTier::DocsOnly => &[(
                r"readme|\bdocs?\b|documentation|changelog|\btypo|\bcomments?\b|\bspelling",
                "documentation only",
            )],
            ScopeTier::Medium => &[(
                r"\bmodule\b|\bcomponent|\bservice\b|\bfile\b|\bfunction\b|\bclass\b|\bendpoint|\bpage\b|\bscreen\b",
                "single module",
            )],
        }
    }
}

/// Keywords counted for the compound complexity floor.
const STRUCTURAL_KEYWORDS: &[(&str, &str)] = &[
    ("refactor", r"\brefactor"),
    ("migrate", r"\bmigrat"),
    ("integrate", r"\bintegrat"),
    ("redesign", r"\bredesign"),
    ("restructure", r"\brestructur"),
    ("rewrite", r"\brewrit"),
    ("overhaul", r"\boverhaul"),
    ("architecture", r"\b(re-?)?architect"),
];

// ---------------------------------------------------------------------------
// Compiled registry
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Pattern {
    pub tier: &'static str,
    pub score: DimensionScore,
    pub label: &'static str,
    regex: Regex,
}

impl Pattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug)]
pub struct DimensionRegistry {
    pub dimension: Dimension,
    pub default: DimensionScore,
    /// Patterns flattened in evaluation order.
    patterns: Vec<Pattern>,
}

impl DimensionRegistry {
    fn build<T: TierOrder>(dimension: Dimension) -> Self {
        let patterns = T::priority_order()
            .iter()
            .flat_map(|tier| {
                tier.patterns().iter().map(move |(src, label)| Pattern {
                    tier: tier.name(),
                    score: DimensionScore::new(tier.score()),
                    label: *label,
                    regex: compile(src),
                })
            })
            .collect();
        Self {
            dimension,
            default: default_score(dimension),
            patterns,
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

#[derive(Debug)]
pub struct PatternRegistry {
    risk: DimensionRegistry,
    complexity: DimensionRegistry,
    scope: DimensionRegistry,
    structural: Vec<(&'static str, Regex)>,
}

static BUILTIN: OnceLock<PatternRegistry> = OnceLock::new();

impl PatternRegistry {
    pub fn new() -> Self {
        Self {
            risk: DimensionRegistry::build::<RiskTier>(Dimension::Risk),
            complexity: DimensionRegistry::build::<ComplexityTier>(Dimension::Complexity),
            scope: DimensionRegistry::build::<ScopeTier>(Dimension::Scope),
            structural: STRUCTURAL_KEYWORDS
                .iter()
                .map(|(name, src)| (*name, compile(src)))
                .collect(),
        }
    }

    /// Shared registry, compiled on first use.
    pub fn builtin() -> &'static PatternRegistry {
        BUILTIN.get_or_init(PatternRegistry::new)
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionRegistry {
        match dimension {
            Dimension::Risk => &self.risk,
            Dimension::Complexity => &self.complexity,
            Dimension::Scope => &self.scope,
        }
    }

    /// Distinct structural keywords present in `text`.
    pub fn structural_keywords(&self, text: &str) -> Vec<&'static str> {
        self.structural
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(src: &str) -> Regex {
    // Sources are compile-time literals covered by the tests below.
    RegexBuilder::new(src)
        .case_insensitive(true)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
