//! # Score Calculation
//!
//! Each workflow type has a declarative table of scoring rules. A rule adds
//! its points when its condition holds for the extracted factors; the sum is
//! clamped to 100. The three types are scored independently.

use crate::factors::{AnalysisFactors, Factor};
use crate::workflow::WorkflowType;
use serde::{Deserialize, Serialize};

/// Upper bound of every score.
pub const MAX_SCORE: u32 = 100;

/// A boolean condition over extracted factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The factor fired.
    Present(Factor),
    /// The factor did not fire.
    Absent(Factor),
    /// Every nested condition holds.
    All(&'static [Condition]),
}

impl Condition {
    pub fn holds(&self, factors: &AnalysisFactors) -> bool {
        match self {
            Condition::Present(factor) => factors.get(*factor),
            Condition::Absent(factor) => !factors.get(*factor),
            Condition::All(conditions) => conditions.iter().all(|c| c.holds(factors)),
        }
    }

    /// True if `factor` is required to be absent anywhere in this condition.
    pub fn negates(&self, factor: Factor) -> bool {
        match self {
            Condition::Present(_) => false,
            Condition::Absent(f) => *f == factor,
            Condition::All(conditions) => conditions.iter().any(|c| c.negates(factor)),
        }
    }
}

/// Points awarded to a workflow type when `condition` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRule {
    pub condition: Condition,
    pub points: u32,
}

const fn rule(condition: Condition, points: u32) -> ScoreRule {
    ScoreRule { condition, points }
}

pub const DETERMINISTIC_RULES: &[ScoreRule] = &[
    rule(Condition::Absent(Factor::NeedsContextualUnderstanding), 20),
    rule(Condition::Absent(Factor::RequiresLearning), 20),
    rule(Condition::Absent(Factor::InvolvesCreativeContent), 15),
    rule(Condition::Present(Factor::HasComplexConditions), 10),
    rule(Condition::Present(Factor::InvolvesMultipleSteps), 10),
    rule(Condition::Absent(Factor::HasVariableInputs), 15),
    rule(Condition::Present(Factor::RequiresRealTimeResponse), 10),
];

pub const AI_ENHANCED_RULES: &[ScoreRule] = &[
    rule(Condition::Present(Factor::HasDataProcessing), 15),
    rule(Condition::Present(Factor::NeedsContextualUnderstanding), 20),
    rule(Condition::Present(Factor::InvolvesCreativeContent), 20),
    rule(Condition::Present(Factor::HasVariableInputs), 15),
    rule(
        Condition::All(&[
            Condition::Present(Factor::HasDecisionMaking),
            Condition::Absent(Factor::RequiresLearning),
        ]),
        10,
    ),
    rule(Condition::Present(Factor::InvolvesMultipleSteps), 10),
    rule(Condition::Absent(Factor::NeedsErrorRecovery), 10),
];

pub const AGENTIC_RULES: &[ScoreRule] = &[
    rule(Condition::Present(Factor::RequiresLearning), 25),
    rule(Condition::Present(Factor::NeedsErrorRecovery), 20),
    rule(Condition::Present(Factor::HasVariableInputs), 15),
    rule(Condition::Present(Factor::HasComplexConditions), 15),
    rule(Condition::Present(Factor::NeedsContextualUnderstanding), 10),
    rule(Condition::Present(Factor::HasExternalDependencies), 10),
    // Agentic flows can afford to be slower
    rule(Condition::Absent(Factor::RequiresRealTimeResponse), 5),
];

/// Scoring table for a workflow type.
pub fn score_rules(workflow_type: WorkflowType) -> &'static [ScoreRule] {
    match workflow_type {
        WorkflowType::Deterministic => DETERMINISTIC_RULES,
        WorkflowType::AiEnhanced => AI_ENHANCED_RULES,
        WorkflowType::Agentic => AGENTIC_RULES,
    }
}

/// Unclamped sum of the points of every matching rule.
pub fn raw_score(workflow_type: WorkflowType, factors: &AnalysisFactors) -> u32 {
    score_rules(workflow_type)
        .iter()
        .filter(|rule| rule.condition.holds(factors))
        .map(|rule| rule.points)
        .sum()
}

/// Clamped scores for all three workflow types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeScores {
    pub deterministic: u32,
    pub ai_enhanced: u32,
    pub agentic: u32,
}

impl TypeScores {
    pub fn calculate(factors: &AnalysisFactors) -> Self {
        let score = |workflow_type| raw_score(workflow_type, factors).min(MAX_SCORE);
        Self {
            deterministic: score(WorkflowType::Deterministic),
            ai_enhanced: score(WorkflowType::AiEnhanced),
            agentic: score(WorkflowType::Agentic),
        }
    }

    pub fn get(&self, workflow_type: WorkflowType) -> u32 {
        match workflow_type {
            WorkflowType::Deterministic => self.deterministic,
            WorkflowType::AiEnhanced => self.ai_enhanced,
            WorkflowType::Agentic => self.agentic,
        }
    }

    /// Type with the strictly greatest score.
    ///
    /// Ties go to the earlier type in [`WorkflowType::ALL`], so the priority is
    /// deterministic, then ai-enhanced, then agentic.
    pub fn best(&self) -> WorkflowType {
        let mut best = WorkflowType::Deterministic;
        for candidate in WorkflowType::ALL {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

/// Score all three workflow types.
pub fn calculate_scores(factors: &AnalysisFactors) -> TypeScores {
    TypeScores::calculate(factors)
}
