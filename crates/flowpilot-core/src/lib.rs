//! # Flowpilot Core
//!
//! Workflow-type recommendation engine for turning free-text descriptions of
//! manual business processes into n8n automation workflows.
//!
//! A request is classified against three archetypes:
//!
//! - **Deterministic**: fixed rules and logic
//! - **AI-enhanced**: deterministic flow with AI nodes for specific steps
//! - **Agentic**: autonomous, adaptive agents
//!
//! Classification is a pure function of the input text: keyword matching
//! yields [`AnalysisFactors`], declarative tables turn them into
//! [`TypeScores`], and the winner is expanded into a [`WorkflowRecommendation`].
//!
//! ```rust
//! use flowpilot_core::{analyze, Complexity, WorkflowType};
//!
//! let rec = analyze("");
//! assert_eq!(rec.workflow_type, WorkflowType::Deterministic);
//! assert_eq!(rec.confidence, 70);
//! assert_eq!(rec.complexity, Complexity::Low);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod factors;
pub mod handoff;
pub mod rationale;
pub mod recommendation;
pub mod report;
pub mod scoring;
pub mod workflow;

pub use analyzer::{WorkflowAnalyzer, analyze};
pub use config::AnalyzerConfig;
pub use error::{ConfigError, ConfigResult};
pub use factors::{AnalysisFactors, Factor, PatternTable, extract_factors};
pub use handoff::{AnalysisTrigger, RecommendationChoice};
pub use recommendation::{Analysis, WorkflowRecommendation};
pub use report::RecommendationReport;
pub use scoring::{Condition, MAX_SCORE, ScoreRule, TypeScores, calculate_scores};
pub use workflow::{Complexity, ParseWorkflowTypeError, Tradeoffs, WorkflowProfile, WorkflowType};
