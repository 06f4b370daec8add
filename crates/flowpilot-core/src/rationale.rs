//! Rationale rules: which fired (or missing) factors justify each workflow type.

use crate::factors::{AnalysisFactors, Factor};
use crate::scoring::Condition;
use crate::workflow::WorkflowType;

/// An explanation included in the rationale when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationaleRule {
    pub condition: Condition,
    pub reason: &'static str,
}

const fn reason(condition: Condition, reason: &'static str) -> RationaleRule {
    RationaleRule { condition, reason }
}

pub const DETERMINISTIC_RATIONALE: &[RationaleRule] = &[
    reason(
        Condition::Absent(Factor::NeedsContextualUnderstanding),
        "No complex language understanding required",
    ),
    reason(
        Condition::Absent(Factor::RequiresLearning),
        "Fixed rules and logic are sufficient",
    ),
    reason(
        Condition::Present(Factor::RequiresRealTimeResponse),
        "Fast, predictable response times needed",
    ),
    reason(
        Condition::Absent(Factor::HasVariableInputs),
        "Consistent input format expected",
    ),
];

pub const AI_ENHANCED_RATIONALE: &[RationaleRule] = &[
    reason(
        Condition::Present(Factor::NeedsContextualUnderstanding),
        "Requires understanding of natural language or context",
    ),
    reason(
        Condition::Present(Factor::InvolvesCreativeContent),
        "Benefits from AI content generation capabilities",
    ),
    reason(
        Condition::Present(Factor::HasDataProcessing),
        "Can leverage AI for intelligent data processing",
    ),
    reason(
        Condition::Present(Factor::HasVariableInputs),
        "AI can handle diverse input formats effectively",
    ),
];

pub const AGENTIC_RATIONALE: &[RationaleRule] = &[
    reason(
        Condition::Present(Factor::RequiresLearning),
        "Needs to learn and adapt from experience",
    ),
    reason(
        Condition::Present(Factor::NeedsErrorRecovery),
        "Requires autonomous error handling and recovery",
    ),
    reason(
        Condition::Present(Factor::HasComplexConditions),
        "Complex decision-making that benefits from AI reasoning",
    ),
    reason(
        Condition::Present(Factor::HasExternalDependencies),
        "Can autonomously manage external service interactions",
    ),
];

pub fn rationale_rules(workflow_type: WorkflowType) -> &'static [RationaleRule] {
    match workflow_type {
        WorkflowType::Deterministic => DETERMINISTIC_RATIONALE,
        WorkflowType::AiEnhanced => AI_ENHANCED_RATIONALE,
        WorkflowType::Agentic => AGENTIC_RATIONALE,
    }
}

/// Reasons for recommending `workflow_type`, in rule declaration order.
pub fn build_rationale(workflow_type: WorkflowType, factors: &AnalysisFactors) -> Vec<String> {
    rationale_rules(workflow_type)
        .iter()
        .filter(|rule| rule.condition.holds(factors))
        .map(|rule| rule.reason.to_string())
        .collect()
}
