//! Workflow archetypes and their static profiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three automation archetypes a request can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowType {
    /// Fixed rules and logic, no model in the loop.
    Deterministic,
    /// Deterministic flow with AI nodes for specific steps.
    AiEnhanced,
    /// Autonomous, adaptive agents.
    Agentic,
}

impl WorkflowType {
    /// All types in tie-break priority order.
    pub const ALL: [WorkflowType; 3] = [
        WorkflowType::Deterministic,
        WorkflowType::AiEnhanced,
        WorkflowType::Agentic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowType::Deterministic => "deterministic",
            WorkflowType::AiEnhanced => "ai-enhanced",
            WorkflowType::Agentic => "agentic",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowType::Deterministic => "Deterministic",
            WorkflowType::AiEnhanced => "AI Enhanced",
            WorkflowType::Agentic => "Agentic",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkflowType::Deterministic => "⚙️",
            WorkflowType::AiEnhanced => "🧠",
            WorkflowType::Agentic => "🤖",
        }
    }

    /// Static examples, trade-offs and estimates for this type.
    pub fn profile(self) -> &'static WorkflowProfile {
        match self {
            WorkflowType::Deterministic => &DETERMINISTIC_PROFILE,
            WorkflowType::AiEnhanced => &AI_ENHANCED_PROFILE,
            WorkflowType::Agentic => &AGENTIC_PROFILE,
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a workflow type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown workflow type: '{input}' (expected deterministic, ai-enhanced or agentic)")]
pub struct ParseWorkflowTypeError {
    pub input: String,
}

impl FromStr for WorkflowType {
    type Err = ParseWorkflowTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deterministic" => Ok(WorkflowType::Deterministic),
            "ai-enhanced" | "ai_enhanced" | "aienhanced" => Ok(WorkflowType::AiEnhanced),
            "agentic" => Ok(WorkflowType::Agentic),
            _ => Err(ParseWorkflowTypeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Setup complexity of a workflow type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pros and cons of a workflow type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tradeoffs {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Request-independent description of a workflow type.
#[derive(Debug)]
pub struct WorkflowProfile {
    pub examples: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub complexity: Complexity,
    pub estimated_setup_time: &'static str,
}

impl WorkflowProfile {
    pub fn tradeoffs(&self) -> Tradeoffs {
        Tradeoffs {
            pros: to_owned_list(self.pros),
            cons: to_owned_list(self.cons),
        }
    }

    pub fn examples(&self) -> Vec<String> {
        to_owned_list(self.examples)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

static DETERMINISTIC_PROFILE: WorkflowProfile = WorkflowProfile {
    examples: &[
        "Simple data routing and filtering",
        "Rule-based email sorting and forwarding",
        "Scheduled report generation",
        "Basic form processing and notifications",
    ],
    pros: &[
        "Fast and reliable execution",
        "Predictable behavior",
        "Easy to debug and maintain",
        "Low resource requirements",
    ],
    cons: &[
        "Limited flexibility",
        "Cannot handle unexpected inputs well",
        "No learning or adaptation capabilities",
    ],
    complexity: Complexity::Low,
    estimated_setup_time: "30 minutes - 2 hours",
};

static AI_ENHANCED_PROFILE: WorkflowProfile = WorkflowProfile {
    examples: &[
        "Smart email categorization and responses",
        "Content generation with data inputs",
        "Intelligent data extraction and processing",
        "Context-aware decision making",
    ],
    pros: &[
        "Handles variable inputs intelligently",
        "Can understand context and nuance",
        "Good balance of automation and intelligence",
        "Relatively predictable costs",
    ],
    cons: &[
        "Requires AI service integration",
        "Slightly slower than pure deterministic",
        "May need prompt engineering",
    ],
    complexity: Complexity::Medium,
    estimated_setup_time: "2-6 hours",
};

static AGENTIC_PROFILE: WorkflowProfile = WorkflowProfile {
    examples: &[
        "Autonomous customer service agents",
        "Self-optimizing business processes",
        "Adaptive content creation workflows",
        "Intelligent system monitoring and response",
    ],
    pros: &[
        "Fully autonomous operation",
        "Learns and improves over time",
        "Handles complex, changing scenarios",
        "Can recover from errors independently",
    ],
    cons: &[
        "More complex to set up and monitor",
        "Higher resource requirements",
        "Less predictable behavior",
        "Requires careful guardrails",
    ],
    complexity: Complexity::High,
    estimated_setup_time: "1-3 days",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&WorkflowType::AiEnhanced).unwrap(),
            "\"ai-enhanced\""
        );
        for workflow_type in WorkflowType::ALL {
            let json = serde_json::to_string(&workflow_type).unwrap();
            assert_eq!(json, format!("\"{}\"", workflow_type));
        }
    }

    #[test]
    fn test_workflow_type_from_str() {
        assert_eq!("agentic".parse(), Ok(WorkflowType::Agentic));
        assert_eq!(" AI-Enhanced ".parse(), Ok(WorkflowType::AiEnhanced));
        assert_eq!("ai_enhanced".parse(), Ok(WorkflowType::AiEnhanced));

        let err = "hybrid".parse::<WorkflowType>().unwrap_err();
        assert_eq!(err.input, "hybrid");
        assert!(err.to_string().contains("hybrid"));
    }

    #[test]
    fn test_profile_shapes() {
        for workflow_type in WorkflowType::ALL {
            let profile = workflow_type.profile();
            assert_eq!(profile.examples.len(), 4);
            assert!((3..=4).contains(&profile.pros.len()));
            assert!((3..=4).contains(&profile.cons.len()));
        }
    }

    #[test]
    fn test_profile_complexity_and_setup_time() {
        assert_eq!(WorkflowType::Deterministic.profile().complexity, Complexity::Low);
        assert_eq!(WorkflowType::AiEnhanced.profile().complexity, Complexity::Medium);
        assert_eq!(WorkflowType::Agentic.profile().complexity, Complexity::High);
        assert_eq!(
            WorkflowType::Deterministic.profile().estimated_setup_time,
            "30 minutes - 2 hours"
        );
        assert_eq!(WorkflowType::AiEnhanced.profile().estimated_setup_time, "2-6 hours");
        assert_eq!(WorkflowType::Agentic.profile().estimated_setup_time, "1-3 days");
    }

    #[test]
    fn test_complexity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Complexity::Medium).unwrap(), "\"medium\"");
    }
}
