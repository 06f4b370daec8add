use flowpilot_core::{ConfigError, ParseWorkflowTypeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    WorkflowType(#[from] ParseWorkflowTypeError),

    #[error("No description given (pass text, --file, or pipe it on stdin)")]
    EmptyInput,

    #[error("Pass either --accept <TYPE> or --modify")]
    NoChoice,
}

pub type CliResult<T> = Result<T, CliError>;
