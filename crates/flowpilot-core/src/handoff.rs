//! # Chat Hand-off
//!
//! Glue between the analyzer and the hosting chat: deciding when a user
//! message is worth analyzing, and turning the user's reaction to a
//! recommendation into the plain-text message sent back to the conversation.

use crate::workflow::WorkflowType;
use serde::{Deserialize, Serialize};

/// Decides which user messages should receive a workflow recommendation.
///
/// Only messages early in the conversation that mention automation intent
/// qualify; later turns refine an already recommended workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisTrigger {
    /// Last user turn (1-based) that may still trigger an analysis.
    pub max_user_turns: usize,
    /// Lower-case phrases signalling automation intent.
    pub intent_keywords: Vec<String>,
}

impl Default for AnalysisTrigger {
    fn default() -> Self {
        Self {
            max_user_turns: 3,
            intent_keywords: [
                "automate",
                "automation",
                "workflow",
                "n8n",
                "manual",
                "repetitive",
                "every day",
                "every week",
                "process",
                "integrate",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        }
    }
}

impl AnalysisTrigger {
    /// `user_turn` counts user messages so far, including `message`.
    pub fn should_analyze(&self, message: &str, user_turn: usize) -> bool {
        if user_turn == 0 || user_turn > self.max_user_turns {
            return false;
        }
        let text = message.to_lowercase();
        self.intent_keywords
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
    }
}

/// The user's reaction to a displayed recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "type", rename_all = "lowercase")]
pub enum RecommendationChoice {
    /// Generate a workflow of the given type.
    Accept(WorkflowType),
    /// Go back and refine the requirements first.
    Modify,
}

impl RecommendationChoice {
    /// Plain-text message forwarded into the conversation.
    pub fn conversation_message(&self) -> String {
        match self {
            RecommendationChoice::Accept(workflow_type) => format!(
                "Generate {} Workflow: I accept the {} workflow recommendation. \
                 Please design the n8n workflow using this approach.",
                workflow_type.label(),
                workflow_type
            ),
            RecommendationChoice::Modify => {
                "I'd like to modify my requirements before generating the workflow.".to_string()
            }
        }
    }
}
