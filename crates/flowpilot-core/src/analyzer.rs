//! # Workflow Analyzer
//!
//! Entry point of the recommendation engine: extract factors from the request,
//! score every workflow type, pick the winner and assemble the recommendation.
//!
//! ```rust
//! use flowpilot_core::{WorkflowAnalyzer, WorkflowType};
//!
//! let analyzer = WorkflowAnalyzer::new();
//! let rec = analyzer.analyze("Learn from failed syncs and retry against the external API");
//! assert_eq!(rec.workflow_type, WorkflowType::Agentic);
//! ```

use crate::config::AnalyzerConfig;
use crate::error::ConfigResult;
use crate::factors::{AnalysisFactors, PatternTable};
use crate::recommendation::{Analysis, WorkflowRecommendation};
use crate::scoring::TypeScores;

/// Rule-based classifier for automation requests.
///
/// Stateless apart from its trigger phrase table, so a single instance can be
/// shared across threads and reused for any number of requests.
#[derive(Debug, Clone, Default)]
pub struct WorkflowAnalyzer {
    patterns: PatternTable,
}

impl WorkflowAnalyzer {
    /// Analyzer with the built-in trigger phrases.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(patterns: PatternTable) -> Self {
        Self { patterns }
    }

    /// Analyzer using the extra trigger phrases of a validated configuration.
    pub fn from_config(config: &AnalyzerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_patterns(config.pattern_table()))
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn extract_factors(&self, description: &str) -> AnalysisFactors {
        self.patterns.extract(description)
    }

    /// Recommend a workflow type for `description`. Never fails.
    pub fn analyze(&self, description: &str) -> WorkflowRecommendation {
        self.analyze_detailed(description).recommendation
    }

    /// Like [`WorkflowAnalyzer::analyze`], also returning factors and scores.
    pub fn analyze_detailed(&self, description: &str) -> Analysis {
        let factors = self.extract_factors(description);
        let scores = TypeScores::calculate(&factors);
        let workflow_type = scores.best();

        tracing::debug!(
            input_chars = description.chars().count(),
            active_factors = ?factors.active(),
            deterministic = scores.deterministic,
            ai_enhanced = scores.ai_enhanced,
            agentic = scores.agentic,
            workflow_type = %workflow_type,
            "Workflow analysis complete"
        );

        let recommendation =
            WorkflowRecommendation::build(workflow_type, scores.get(workflow_type), &factors);

        Analysis {
            factors,
            scores,
            recommendation,
        }
    }
}

/// Analyze `description` with the built-in trigger phrases.
pub fn analyze(description: &str) -> WorkflowRecommendation {
    WorkflowAnalyzer::new().analyze(description)
}
