//! Analyzer configuration loading and validation
//!
//! Configuration is optional. An empty file (or no file at all) reproduces the
//! built-in behavior; the only extension points are extra trigger phrases per
//! factor and the chat hand-off trigger settings.

use crate::error::{ConfigError, ConfigResult};
use crate::factors::{Factor, PatternTable};
use crate::handoff::AnalysisTrigger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Extra trigger phrases, keyed by factor name (camelCase).
    pub patterns: BTreeMap<Factor, Vec<String>>,
    pub trigger: AnalysisTrigger,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::load_from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            extra_patterns = config.patterns.values().map(Vec::len).sum::<usize>(),
            "Loaded analyzer configuration"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn load_from_toml(toml_content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(toml_content)?)
    }

    /// Reject settings that would make the analyzer misbehave.
    pub fn validate(&self) -> ConfigResult<()> {
        for (factor, phrases) in &self.patterns {
            if phrases.iter().any(|phrase| phrase.trim().is_empty()) {
                return Err(ConfigError::EmptyPattern { factor: *factor });
            }
        }

        if self.trigger.max_user_turns == 0 {
            return Err(ConfigError::InvalidTrigger {
                message: "max_user_turns must be > 0".to_string(),
            });
        }

        if self.trigger.intent_keywords.is_empty() {
            return Err(ConfigError::InvalidTrigger {
                message: "intent_keywords cannot be empty".to_string(),
            });
        }

        if self
            .trigger
            .intent_keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err(ConfigError::InvalidTrigger {
                message: "intent_keywords cannot contain empty keywords".to_string(),
            });
        }

        Ok(())
    }

    /// Trigger phrase table with the configured extras applied.
    pub fn pattern_table(&self) -> PatternTable {
        self.patterns
            .iter()
            .fold(PatternTable::new(), |table, (factor, phrases)| {
                table.with_extra(*factor, phrases)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AnalyzerConfig::load_from_toml("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.pattern_table(), PatternTable::new());
    }

    #[test]
    fn test_load_patterns_and_trigger() {
        let config = AnalyzerConfig::load_from_toml(
            r#"
            [patterns]
            hasDataProcessing = ["CSV", "spreadsheet"]
            needsHumanIntervention = ["sign-off"]

            [trigger]
            max_user_turns = 2
            intent_keywords = ["automate"]
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.trigger.max_user_turns, 2);

        let table = config.pattern_table();
        assert_eq!(
            table.extra(Factor::HasDataProcessing),
            ["csv".to_string(), "spreadsheet".to_string()]
        );
        assert!(table.extract("needs manager sign-off").needs_human_intervention);
    }

    #[test]
    fn test_partial_trigger_section_keeps_defaults() {
        let config = AnalyzerConfig::load_from_toml("[trigger]\nmax_user_turns = 5\n").unwrap();
        assert_eq!(config.trigger.max_user_turns, 5);
        assert_eq!(
            config.trigger.intent_keywords,
            AnalysisTrigger::default().intent_keywords
        );
    }

    #[test]
    fn test_unknown_factor_is_rejected() {
        let result = AnalyzerConfig::load_from_toml("[patterns]\nhasMagic = [\"x\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let result = AnalyzerConfig::load_from_toml("[scoring]\nbonus = 10\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_phrase_fails_validation() {
        let config =
            AnalyzerConfig::load_from_toml("[patterns]\nrequiresLearning = [\"  \"]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyPattern {
                factor: Factor::RequiresLearning
            })
        ));
    }

    #[test]
    fn test_invalid_trigger_fails_validation() {
        let zero_turns =
            AnalyzerConfig::load_from_toml("[trigger]\nmax_user_turns = 0\n").unwrap();
        assert!(matches!(
            zero_turns.validate(),
            Err(ConfigError::InvalidTrigger { .. })
        ));

        let no_keywords =
            AnalyzerConfig::load_from_toml("[trigger]\nintent_keywords = []\n").unwrap();
        assert!(matches!(
            no_keywords.validate(),
            Err(ConfigError::InvalidTrigger { .. })
        ));

        let blank_keyword =
            AnalyzerConfig::load_from_toml("[trigger]\nintent_keywords = [\"\"]\n").unwrap();
        assert!(blank_keyword.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[patterns]\nhasExternalDependencies = [\"salesforce\"]").unwrap();

        let config = AnalyzerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(
            config.patterns[&Factor::HasExternalDependencies],
            vec!["salesforce".to_string()]
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = AnalyzerConfig::load_from_file("/definitely/not/here/flowpilot.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
