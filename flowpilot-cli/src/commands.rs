use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use flowpilot_core::{
    Analysis, AnalysisTrigger, RecommendationChoice, RecommendationReport, WorkflowType,
};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render an analysis for `flowpilot analyze`.
pub fn render_analysis(analysis: &Analysis, format: OutputFormat, explain: bool) -> CliResult<String> {
    match format {
        OutputFormat::Json if explain => Ok(serde_json::to_string_pretty(analysis)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&analysis.recommendation)?),
        OutputFormat::Text => {
            let mut out = String::new();
            if explain {
                out.push_str(&render_factors(analysis));
                out.push('\n');
            }
            out.push_str(&RecommendationReport::new(&analysis.recommendation).to_string());
            Ok(out)
        }
    }
}

/// Fired factors and the three scores, for `flowpilot factors` and `--explain`.
pub fn render_factors(analysis: &Analysis) -> String {
    let mut out = String::new();
    let active = analysis.factors.active();

    let _ = writeln!(out, "Active factors:");
    if active.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for factor in active {
        let _ = writeln!(out, "  • {}", factor);
    }

    let selected = analysis.recommendation.workflow_type;
    let _ = writeln!(out, "Scores:");
    for workflow_type in WorkflowType::ALL {
        let marker = if workflow_type == selected { "  ← selected" } else { "" };
        let _ = writeln!(
            out,
            "  {:<14}{:>3}{}",
            workflow_type.as_str(),
            analysis.scores.get(workflow_type),
            marker
        );
    }
    out
}

pub fn render_trigger(trigger: &AnalysisTrigger, text: &str, turn: usize) -> String {
    trigger.should_analyze(text, turn).to_string()
}

/// Hand-off message for `flowpilot choose`.
pub fn render_choice(accept: Option<&str>, modify: bool) -> CliResult<String> {
    let choice = match accept {
        Some(raw) => RecommendationChoice::Accept(raw.parse()?),
        None if modify => RecommendationChoice::Modify,
        None => return Err(CliError::NoChoice),
    };
    Ok(choice.conversation_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowpilot_core::WorkflowAnalyzer;

    fn empty_analysis() -> Analysis {
        WorkflowAnalyzer::new().analyze_detailed("")
    }

    #[test]
    fn test_render_json_recommendation() {
        let out = render_analysis(&empty_analysis(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "deterministic");
        assert_eq!(value["confidence"], 70);
        assert!(value.get("factors").is_none());
    }

    #[test]
    fn test_render_json_explain() {
        let out = render_analysis(&empty_analysis(), OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["scores"]["ai-enhanced"], 10);
        assert_eq!(value["factors"]["requiresLearning"], false);
        assert_eq!(value["recommendation"]["type"], "deterministic");
    }

    #[test]
    fn test_render_text_explain() {
        let out = render_analysis(&empty_analysis(), OutputFormat::Text, true).unwrap();
        assert!(out.starts_with("Active factors:\n  (none)\n"));
        assert!(out.contains("deterministic  70  ← selected"));
        assert!(out.contains("⚙️ Deterministic Workflow [RECOMMENDED]"));
    }

    #[test]
    fn test_render_factors_lists_active() {
        let analysis = WorkflowAnalyzer::new().analyze_detailed("retry the webhook");
        let out = render_factors(&analysis);
        assert!(out.contains("  • needsErrorRecovery\n"));
        assert!(out.contains("  • hasExternalDependencies\n"));
        assert!(!out.contains("(none)"));
    }

    #[test]
    fn test_render_trigger() {
        let trigger = AnalysisTrigger::default();
        assert_eq!(render_trigger(&trigger, "automate my inbox", 1), "true");
        assert_eq!(render_trigger(&trigger, "automate my inbox", 9), "false");
    }

    #[test]
    fn test_render_choice() {
        let accepted = render_choice(Some("agentic"), false).unwrap();
        assert!(accepted.starts_with("Generate Agentic Workflow:"));

        let modified = render_choice(None, true).unwrap();
        assert!(modified.contains("modify my requirements"));

        assert!(matches!(render_choice(None, false), Err(CliError::NoChoice)));
        assert!(matches!(
            render_choice(Some("hybrid"), false),
            Err(CliError::WorkflowType(_))
        ));
    }
}
