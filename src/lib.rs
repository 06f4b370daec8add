//! # Flowpilot
//!
//! Flowpilot recommends how a manual business process should be automated in
//! n8n: as a **deterministic** rule-based flow, an **AI-enhanced** flow with
//! model calls for specific steps, or an **agentic** flow that adapts on its own.
//!
//! The recommendation comes from a deterministic keyword classifier, so the
//! same description always produces the same result.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowpilot::{RecommendationReport, WorkflowAnalyzer, WorkflowType};
//!
//! let analyzer = WorkflowAnalyzer::new();
//! let rec = analyzer.analyze(
//!     "The system should learn from past failures, retry automatically, \
//!      and adapt its integration with our external API over time",
//! );
//!
//! assert_eq!(rec.workflow_type, WorkflowType::Agentic);
//! assert_eq!(rec.estimated_setup_time, "1-3 days");
//! println!("{}", RecommendationReport::new(&rec));
//! ```
//!
//! ## Modules
//!
//! - [`factors`]: keyword extraction into twelve boolean signals
//! - [`scoring`]: per-type scoring tables and tie-break
//! - [`rationale`]: explanation rules for the winning type
//! - [`handoff`]: chat trigger heuristic and accept/modify messages
//! - [`config`]: optional TOML configuration

pub use flowpilot_core::*;
