//! Recommendation values returned by the analyzer.

use crate::factors::AnalysisFactors;
use crate::rationale::build_rationale;
use crate::scoring::{MAX_SCORE, TypeScores};
use crate::workflow::{Complexity, Tradeoffs, WorkflowType};
use serde::{Deserialize, Serialize};

/// The recommended workflow type for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecommendation {
    #[serde(rename = "type")]
    pub workflow_type: WorkflowType,
    /// Winning score, 0-100. Not a calibrated probability.
    pub confidence: u8,
    pub rationale: Vec<String>,
    pub examples: Vec<String>,
    pub tradeoffs: Tradeoffs,
    pub complexity: Complexity,
    pub estimated_setup_time: String,
}

impl WorkflowRecommendation {
    /// Assemble the recommendation for `workflow_type`.
    ///
    /// Only `rationale` depends on the factors; everything else comes from the
    /// type's static profile.
    pub fn build(workflow_type: WorkflowType, score: u32, factors: &AnalysisFactors) -> Self {
        let profile = workflow_type.profile();
        Self {
            workflow_type,
            confidence: score.min(MAX_SCORE) as u8,
            rationale: build_rationale(workflow_type, factors),
            examples: profile.examples(),
            tradeoffs: profile.tradeoffs(),
            complexity: profile.complexity,
            estimated_setup_time: profile.estimated_setup_time.to_string(),
        }
    }
}

/// Full trace of one analysis: the factors, all three scores and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub factors: AnalysisFactors,
    pub scores: TypeScores,
    pub recommendation: WorkflowRecommendation,
}
