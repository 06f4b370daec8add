//! Plain-text rendering of a recommendation, for terminals and chat transcripts.

use crate::recommendation::WorkflowRecommendation;
use std::fmt;

/// Display adapter rendering a [`WorkflowRecommendation`] as a text card.
pub struct RecommendationReport<'a> {
    recommendation: &'a WorkflowRecommendation,
}

impl<'a> RecommendationReport<'a> {
    pub fn new(recommendation: &'a WorkflowRecommendation) -> Self {
        Self { recommendation }
    }
}

impl fmt::Display for RecommendationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.recommendation;
        let workflow_type = rec.workflow_type;

        writeln!(
            f,
            "{} {} Workflow [RECOMMENDED]",
            workflow_type.icon(),
            workflow_type.label()
        )?;
        writeln!(
            f,
            "Confidence: {}% • {} complexity • Setup: {}",
            rec.confidence, rec.complexity, rec.estimated_setup_time
        )?;

        if !rec.rationale.is_empty() {
            writeln!(f)?;
            writeln!(f, "Why this approach?")?;
            write_bullets(f, &rec.rationale)?;
        }

        writeln!(f)?;
        writeln!(f, "Example use cases:")?;
        write_bullets(f, &rec.examples)?;

        writeln!(f)?;
        writeln!(f, "✅ Advantages")?;
        write_bullets(f, &rec.tradeoffs.pros)?;

        writeln!(f)?;
        writeln!(f, "⚠️ Considerations")?;
        write_bullets(f, &rec.tradeoffs.cons)
    }
}

fn write_bullets(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(f, "  • {}", item)?;
    }
    Ok(())
}
