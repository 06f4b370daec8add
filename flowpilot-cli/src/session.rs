//! Interactive session: a line-based stand-in for the chat front end.
//!
//! Each non-command line is a user message. Early messages with automation
//! intent get a recommendation card; `accept` and `modify` answer the most
//! recent card with the hand-off message the chat would receive.

use crate::error::CliResult;
use flowpilot_core::{
    AnalysisTrigger, RecommendationChoice, RecommendationReport, WorkflowAnalyzer, WorkflowType,
};
use std::io::{BufRead, Write};

pub fn run_session<R: BufRead, W: Write>(
    analyzer: &WorkflowAnalyzer,
    trigger: &AnalysisTrigger,
    input: R,
    mut output: W,
) -> CliResult<()> {
    let mut user_turn = 0;
    let mut pending: Option<WorkflowType> = None;

    writeln!(output, "🧭 Flowpilot session started")?;
    writeln!(
        output,
        "Describe the process you want to automate (type 'quit' to exit):"
    )?;

    for line in input.lines() {
        let line = line?;
        let message = line.trim();

        match message {
            "" => continue,
            "quit" | "exit" => break,
            "accept" | "modify" => {
                let Some(workflow_type) = pending.take() else {
                    writeln!(output, "No recommendation to answer yet.")?;
                    continue;
                };
                let choice = if message == "accept" {
                    RecommendationChoice::Accept(workflow_type)
                } else {
                    RecommendationChoice::Modify
                };
                tracing::info!(choice = ?choice, "Recommendation answered");
                writeln!(output, "\n💬 {}", choice.conversation_message())?;
            }
            _ => {
                user_turn += 1;
                if !trigger.should_analyze(message, user_turn) {
                    tracing::debug!(user_turn, "Message does not qualify for analysis");
                    writeln!(output, "(no workflow analysis for this message)")?;
                    continue;
                }

                let recommendation = analyzer.analyze(message);
                tracing::info!(
                    user_turn,
                    workflow_type = %recommendation.workflow_type,
                    confidence = recommendation.confidence,
                    "Recommendation produced"
                );
                writeln!(output, "\n{}", RecommendationReport::new(&recommendation))?;
                writeln!(output, "Type 'accept' to generate this workflow or 'modify' to refine.")?;
                pending = Some(recommendation.workflow_type);
            }
        }
    }

    Ok(())
}
