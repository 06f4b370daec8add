//! # Factor Extraction
//!
//! Turns a free-text automation request into the twelve boolean signals the
//! scoring tables work on. Every factor owns a fixed list of trigger phrases;
//! a factor fires when the lower-cased input contains any of them as a plain
//! substring. There is no tokenization, so short phrases also match inside
//! longer words (`"ai"` fires on `"email"`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single boolean signal extracted from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    HasDataProcessing,
    HasDecisionMaking,
    NeedsContextualUnderstanding,
    RequiresLearning,
    HasComplexConditions,
    InvolvesMultipleSteps,
    NeedsHumanIntervention,
    HasVariableInputs,
    RequiresRealTimeResponse,
    InvolvesCreativeContent,
    NeedsErrorRecovery,
    HasExternalDependencies,
}

impl Factor {
    /// All factors in canonical order.
    pub const ALL: [Factor; 12] = [
        Factor::HasDataProcessing,
        Factor::HasDecisionMaking,
        Factor::NeedsContextualUnderstanding,
        Factor::RequiresLearning,
        Factor::HasComplexConditions,
        Factor::InvolvesMultipleSteps,
        Factor::NeedsHumanIntervention,
        Factor::HasVariableInputs,
        Factor::RequiresRealTimeResponse,
        Factor::InvolvesCreativeContent,
        Factor::NeedsErrorRecovery,
        Factor::HasExternalDependencies,
    ];

    /// Wire name, as used in JSON output and config keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Factor::HasDataProcessing => "hasDataProcessing",
            Factor::HasDecisionMaking => "hasDecisionMaking",
            Factor::NeedsContextualUnderstanding => "needsContextualUnderstanding",
            Factor::RequiresLearning => "requiresLearning",
            Factor::HasComplexConditions => "hasComplexConditions",
            Factor::InvolvesMultipleSteps => "involvesMultipleSteps",
            Factor::NeedsHumanIntervention => "needsHumanIntervention",
            Factor::HasVariableInputs => "hasVariableInputs",
            Factor::RequiresRealTimeResponse => "requiresRealTimeResponse",
            Factor::InvolvesCreativeContent => "involvesCreativeContent",
            Factor::NeedsErrorRecovery => "needsErrorRecovery",
            Factor::HasExternalDependencies => "hasExternalDependencies",
        }
    }

    /// Canonical trigger phrases for this factor. All phrases are lower-case.
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Factor::HasDataProcessing => &[
                "process data",
                "analyze",
                "extract",
                "parse",
                "filter",
                "transform",
                "clean data",
                "aggregate",
                "summarize",
            ],
            Factor::HasDecisionMaking => &[
                "decide",
                "choose",
                "determine",
                "if",
                "based on",
                "depending on",
                "condition",
                "rule",
                "criteria",
                "evaluate",
                "assess",
            ],
            Factor::NeedsContextualUnderstanding => &[
                "understand",
                "interpret",
                "meaning",
                "context",
                "sentiment",
                "intent",
                "natural language",
                "conversation",
                "tone",
            ],
            Factor::RequiresLearning => &[
                "learn",
                "adapt",
                "improve",
                "pattern",
                "trend",
                "optimize",
                "machine learning",
                "ai",
                "intelligent",
                "smart",
            ],
            Factor::HasComplexConditions => &[
                "multiple conditions",
                "complex logic",
                "nested",
                "various scenarios",
                "different cases",
                "branching",
                "many rules",
            ],
            Factor::InvolvesMultipleSteps => &[
                "steps", "sequence", "then", "after", "workflow", "process", "pipeline", "chain",
                "series",
            ],
            Factor::NeedsHumanIntervention => &[
                "approval",
                "review",
                "human",
                "manual",
                "confirm",
                "validate",
                "check",
                "verify",
                "oversight",
            ],
            Factor::HasVariableInputs => &[
                "different types",
                "various",
                "dynamic",
                "changing",
                "flexible",
                "any format",
                "multiple sources",
            ],
            Factor::RequiresRealTimeResponse => &[
                "real-time",
                "instant",
                "immediate",
                "fast",
                "quickly",
                "urgent",
                "live",
                "streaming",
            ],
            Factor::InvolvesCreativeContent => &[
                "generate",
                "create",
                "write",
                "compose",
                "content",
                "creative",
                "text",
                "article",
                "email",
                "description",
            ],
            Factor::NeedsErrorRecovery => &[
                "error",
                "fail",
                "retry",
                "fallback",
                "recovery",
                "handle",
                "exception",
                "robust",
            ],
            Factor::HasExternalDependencies => &[
                "api",
                "service",
                "external",
                "third party",
                "integration",
                "webhook",
                "database",
                "system",
            ],
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve signals extracted from one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFactors {
    pub has_data_processing: bool,
    pub has_decision_making: bool,
    pub needs_contextual_understanding: bool,
    pub requires_learning: bool,
    pub has_complex_conditions: bool,
    pub involves_multiple_steps: bool,
    pub needs_human_intervention: bool,
    pub has_variable_inputs: bool,
    pub requires_real_time_response: bool,
    pub involves_creative_content: bool,
    pub needs_error_recovery: bool,
    pub has_external_dependencies: bool,
}

impl AnalysisFactors {
    pub fn get(&self, factor: Factor) -> bool {
        match factor {
            Factor::HasDataProcessing => self.has_data_processing,
            Factor::HasDecisionMaking => self.has_decision_making,
            Factor::NeedsContextualUnderstanding => self.needs_contextual_understanding,
            Factor::RequiresLearning => self.requires_learning,
            Factor::HasComplexConditions => self.has_complex_conditions,
            Factor::InvolvesMultipleSteps => self.involves_multiple_steps,
            Factor::NeedsHumanIntervention => self.needs_human_intervention,
            Factor::HasVariableInputs => self.has_variable_inputs,
            Factor::RequiresRealTimeResponse => self.requires_real_time_response,
            Factor::InvolvesCreativeContent => self.involves_creative_content,
            Factor::NeedsErrorRecovery => self.needs_error_recovery,
            Factor::HasExternalDependencies => self.has_external_dependencies,
        }
    }

    pub fn set(&mut self, factor: Factor, value: bool) {
        let slot = match factor {
            Factor::HasDataProcessing => &mut self.has_data_processing,
            Factor::HasDecisionMaking => &mut self.has_decision_making,
            Factor::NeedsContextualUnderstanding => &mut self.needs_contextual_understanding,
            Factor::RequiresLearning => &mut self.requires_learning,
            Factor::HasComplexConditions => &mut self.has_complex_conditions,
            Factor::InvolvesMultipleSteps => &mut self.involves_multiple_steps,
            Factor::NeedsHumanIntervention => &mut self.needs_human_intervention,
            Factor::HasVariableInputs => &mut self.has_variable_inputs,
            Factor::RequiresRealTimeResponse => &mut self.requires_real_time_response,
            Factor::InvolvesCreativeContent => &mut self.involves_creative_content,
            Factor::NeedsErrorRecovery => &mut self.needs_error_recovery,
            Factor::HasExternalDependencies => &mut self.has_external_dependencies,
        };
        *slot = value;
    }

    /// Builder-style variant of [`AnalysisFactors::set`].
    pub fn with(mut self, factor: Factor, value: bool) -> Self {
        self.set(factor, value);
        self
    }

    /// Every factor paired with its value, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, bool)> + '_ {
        Factor::ALL.into_iter().map(move |factor| (factor, self.get(factor)))
    }

    /// Factors that fired, in canonical order.
    pub fn active(&self) -> Vec<Factor> {
        self.iter()
            .filter_map(|(factor, value)| value.then_some(factor))
            .collect()
    }
}

/// Trigger phrase lookup: the canonical lists plus optional extra phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTable {
    extra: BTreeMap<Factor, Vec<String>>,
}

impl PatternTable {
    /// Table with only the canonical phrases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extra trigger phrases for `factor`. Phrases are trimmed and lower-cased.
    pub fn with_extra<I, S>(mut self, factor: Factor, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.extra.entry(factor).or_default();
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !entry.contains(&phrase) {
                entry.push(phrase);
            }
        }
        self
    }

    /// Extra phrases registered for `factor`.
    pub fn extra(&self, factor: Factor) -> &[String] {
        self.extra.get(&factor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether `text` (already lower-cased) triggers `factor`.
    pub fn matches(&self, factor: Factor, text: &str) -> bool {
        contains_any(text, factor.patterns())
            || self.extra(factor).iter().any(|phrase| text.contains(phrase.as_str()))
    }

    /// Extract all factors from a raw description.
    pub fn extract(&self, description: &str) -> AnalysisFactors {
        let text = description.to_lowercase();
        let mut factors = AnalysisFactors::default();
        for factor in Factor::ALL {
            factors.set(factor, self.matches(factor, &text));
        }
        factors
    }
}

/// Extract factors using only the canonical phrase lists.
pub fn extract_factors(description: &str) -> AnalysisFactors {
    PatternTable::new().extract(description)
}

fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|pattern| text.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_factors() {
        let factors = extract_factors("");
        assert_eq!(factors, AnalysisFactors::default());
        assert!(factors.active().is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let lower = extract_factors("analyze the webhook payload");
        let upper = extract_factors("ANALYZE THE WEBHOOK PAYLOAD");
        assert_eq!(lower, upper);
        assert!(upper.has_data_processing);
        assert!(upper.has_external_dependencies);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "ai" sits inside "email", "if" inside "notify"
        let factors = extract_factors("notify me by email");
        assert!(factors.requires_learning);
        assert!(factors.has_decision_making);
        assert!(factors.involves_creative_content);
    }

    #[test]
    fn test_multi_word_phrases() {
        let factors = extract_factors("Pull orders from multiple sources with complex logic");
        assert!(factors.has_variable_inputs);
        assert!(factors.has_complex_conditions);
        assert!(!factors.needs_error_recovery);
    }

    #[test]
    fn test_get_set_cover_every_factor() {
        let mut factors = AnalysisFactors::default();
        for factor in Factor::ALL {
            assert!(!factors.get(factor));
            factors.set(factor, true);
            assert!(factors.get(factor));
        }
        assert_eq!(factors.active(), Factor::ALL.to_vec());
    }

    #[test]
    fn test_every_phrase_triggers_its_factor() {
        for factor in Factor::ALL {
            for phrase in factor.patterns() {
                assert!(
                    extract_factors(phrase).get(factor),
                    "{phrase} should trigger {factor}"
                );
            }
        }
    }

    #[test]
    fn test_extra_patterns_extend_matching() {
        let table = PatternTable::new().with_extra(Factor::HasDataProcessing, ["  CSV ", "csv", ""]);
        assert_eq!(table.extra(Factor::HasDataProcessing), ["csv".to_string()]);
        assert!(table.extract("Import the CSV export").has_data_processing);
        assert!(!extract_factors("Import the CSV export").has_data_processing);
    }

    #[test]
    fn test_factor_serializes_camel_case() {
        let json = serde_json::to_string(&Factor::NeedsContextualUnderstanding).unwrap();
        assert_eq!(json, "\"needsContextualUnderstanding\"");

        let factors = AnalysisFactors::default().with(Factor::RequiresRealTimeResponse, true);
        let value = serde_json::to_value(factors).unwrap();
        assert_eq!(value["requiresRealTimeResponse"], true);
        assert_eq!(value["hasDataProcessing"], false);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for factor in Factor::ALL {
            let json = serde_json::to_string(&factor).unwrap();
            assert_eq!(json, format!("\"{}\"", factor.as_str()));
        }
    }
}
