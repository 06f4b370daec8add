use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod error;
mod input;
mod session;

use commands::{OutputFormat, render_analysis, render_choice, render_factors, render_trigger};
use error::CliResult;
use flowpilot_core::{AnalyzerConfig, WorkflowAnalyzer};
use input::resolve_description;
use session::run_session;

#[derive(Parser, Debug)]
#[command(name = "flowpilot", version)]
#[command(about = "Flowpilot CLI - Recommend n8n workflow types for automation requests")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    /// Default log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend a workflow type for a process description
    Analyze {
        /// Description text (read from --file or stdin when omitted)
        text: Vec<String>,
        /// Read the description from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Include extracted factors and all three scores
        #[arg(long)]
        explain: bool,
    },
    /// Show extracted factors and per-type scores
    Factors {
        /// Description text (read from stdin when omitted)
        text: Vec<String>,
    },
    /// Check whether a chat message should trigger an analysis
    Trigger {
        /// 1-based count of user messages so far, including this one
        #[arg(long)]
        turn: usize,
        /// Message text (read from stdin when omitted)
        text: Vec<String>,
    },
    /// Print the chat hand-off message for a recommendation decision
    Choose {
        /// Accept the given workflow type (deterministic, ai-enhanced, agentic)
        #[arg(long, conflicts_with = "modify", required_unless_present = "modify")]
        accept: Option<String>,
        /// Ask to refine the requirements instead
        #[arg(long)]
        modify: bool,
    },
    /// Interactive session simulating the chat hand-off
    Session,
}

fn init_logging(format: LogFormat, level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match level.parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}

fn load_config(path: Option<&PathBuf>) -> CliResult<AnalyzerConfig> {
    let config = match path {
        Some(path) => AnalyzerConfig::load_from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_ref())?;
    let analyzer = WorkflowAnalyzer::from_config(&config)?;

    match cli.command {
        Commands::Analyze {
            text,
            file,
            format,
            explain,
        } => {
            let description = resolve_description(&text, file.as_deref(), std::io::stdin())?;
            let analysis = analyzer.analyze_detailed(&description);
            println!("{}", render_analysis(&analysis, format, explain)?.trim_end());
        }
        Commands::Factors { text } => {
            let description = resolve_description(&text, None, std::io::stdin())?;
            let analysis = analyzer.analyze_detailed(&description);
            print!("{}", render_factors(&analysis));
        }
        Commands::Trigger { turn, text } => {
            let message = resolve_description(&text, None, std::io::stdin())?;
            println!("{}", render_trigger(&config.trigger, &message, turn));
        }
        Commands::Choose { accept, modify } => {
            println!("{}", render_choice(accept.as_deref(), modify)?);
        }
        Commands::Session => {
            run_session(
                &analyzer,
                &config.trigger,
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "flowpilot",
            "analyze",
            "--format",
            "json",
            "--explain",
            "sync",
            "invoices",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                text,
                format,
                explain,
                file,
            } => {
                assert_eq!(text, vec!["sync", "invoices"]);
                assert_eq!(format, OutputFormat::Json);
                assert!(explain);
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "flowpilot",
            "factors",
            "--log-format",
            "json",
            "--config",
            "flowpilot.toml",
            "text",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("flowpilot.toml")));
    }

    #[test]
    fn test_choose_requires_exactly_one_option() {
        assert!(Cli::try_parse_from(["flowpilot", "choose"]).is_err());
        assert!(
            Cli::try_parse_from(["flowpilot", "choose", "--accept", "agentic", "--modify"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["flowpilot", "choose", "--modify"]).is_ok());
    }

    #[test]
    fn test_trigger_requires_turn() {
        assert!(Cli::try_parse_from(["flowpilot", "trigger", "automate"]).is_err());
        assert!(Cli::try_parse_from(["flowpilot", "trigger", "--turn", "1", "automate"]).is_ok());
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }
}
