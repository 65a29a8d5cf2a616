// crates/stack-decision-cli/src/main.rs
// ============================================================================
// Module: Stack Decision CLI Entry Point
// Description: Command dispatcher for architecture analysis and config tasks.
// Purpose: Run the decision engine over graph and descriptor files.
// Dependencies: clap, stack-decision-config, stack-decision-core, tracing-subscriber
// ============================================================================

//! ## Overview
//! `stack-decision analyze` reads an architecture graph and a project
//! descriptor, runs the decision engine, and prints the report. Supporting
//! commands list the built-in catalog and print or validate configuration.
//! Diagnostics go to stderr through `tracing`; stdout carries only results.
//!
//! Security posture: input files are untrusted and read under the configured
//! size limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use stack_decision_cli::input::read_json_with_limit;
use stack_decision_cli::render::render_json;
use stack_decision_cli::render::render_summary;
use stack_decision_cli::render::report_value;
use stack_decision_config::LogLevel;
use stack_decision_config::OutputFormat;
use stack_decision_config::StackDecisionConfig;
use stack_decision_config::config_toml_example;
use stack_decision_core::Catalog;
use stack_decision_core::ComponentCategory;
use stack_decision_core::DecisionEngine;
use stack_decision_core::ToolCandidate;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "stack-decision", version, disable_help_subcommand = true)]
struct Cli {
    /// Optional config file path (defaults to stack-decision.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Diagnostic log level (overrides `RUST_LOG` and the config file).
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    log_level: Option<LogLevelArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze an architecture graph and print the decision report.
    Analyze(AnalyzeCommand),
    /// List built-in catalog tools as JSON.
    Catalog(CatalogCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
struct AnalyzeCommand {
    /// Path to the architecture graph JSON file.
    #[arg(long, value_name = "PATH")]
    graph: PathBuf,
    /// Path to the project descriptor JSON file.
    #[arg(long, value_name = "PATH")]
    descriptor: PathBuf,
    /// Output format (overrides `[output].format`).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

/// Arguments for the `catalog` command.
#[derive(Args, Debug)]
struct CatalogCommand {
    /// Restrict the listing to one component category.
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print a canonical example configuration.
    Example,
    /// Validate a configuration file.
    Validate,
}

/// Output formats accepted on the command line.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum FormatArg {
    /// Compact JSON.
    Json,
    /// Indented JSON.
    Pretty,
    /// Text summary.
    Summary,
}

/// Log levels accepted on the command line.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LogLevelArg {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational events.
    Info,
    /// Pipeline events.
    Debug,
    /// Everything.
    Trace,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let flag_level = cli.log_level.map(LogLevel::from);
    match cli.command {
        Commands::Analyze(command) => command_analyze(&command, cli.config, flag_level),
        Commands::Catalog(command) => {
            let config = load_config(cli.config)?;
            init_logging(flag_level, config.logging.level);
            command_catalog(&command)
        }
        Commands::Config {
            command,
        } => command_config(&command, cli.config, flag_level),
    }
}

/// Installs the stderr log subscriber.
///
/// An explicit flag wins, then `RUST_LOG`, then the configured level.
fn init_logging(flag: Option<LogLevel>, configured: LogLevel) {
    let filter = match flag {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.as_str())),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

// ============================================================================
// SECTION: Analyze Command
// ============================================================================

/// Executes the `analyze` command.
fn command_analyze(
    command: &AnalyzeCommand,
    config_path: Option<PathBuf>,
    flag_level: Option<LogLevel>,
) -> CliResult<ExitCode> {
    let config = load_config(config_path)?;
    init_logging(flag_level, config.logging.level);

    let max_bytes = config.input.max_input_bytes;
    let graph = read_json_with_limit(&command.graph, "graph", max_bytes)
        .map_err(|err| CliError::new(err.to_string()))?;
    let descriptor = read_json_with_limit(&command.descriptor, "descriptor", max_bytes)
        .map_err(|err| CliError::new(err.to_string()))?;

    let engine = DecisionEngine::new(Catalog::builtin(), config.engine_limits())
        .map_err(|err| CliError::new(format!("failed to start engine: {err}")))?;
    let report = engine
        .evaluate_json(graph, descriptor)
        .map_err(|err| CliError::new(format!("analysis failed: {err}")))?;
    let digest = if config.output.include_digest {
        Some(report.digest().map_err(|err| CliError::new(format!("analysis failed: {err}")))?)
    } else {
        None
    };
    info!(decisions = report.decisions.len(), "analysis complete");

    let format = command.format.map_or(config.output.format, OutputFormat::from);
    let rendered = match format {
        OutputFormat::Summary => render_summary(&report, digest.as_ref()),
        OutputFormat::Json | OutputFormat::Pretty => {
            let value =
                report_value(&report, digest.as_ref(), config.output.include_candidates)
                    .map_err(|err| CliError::new(err.to_string()))?;
            render_json(&value, format == OutputFormat::Pretty)
                .map_err(|err| CliError::new(err.to_string()))?
        }
    };
    write_stdout(&rendered)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Catalog Command
// ============================================================================

/// Executes the `catalog` command.
fn command_catalog(command: &CatalogCommand) -> CliResult<ExitCode> {
    let catalog = Catalog::builtin();
    let tools: Vec<&ToolCandidate> = match &command.category {
        Some(name) => {
            let category = ComponentCategory::parse(name)
                .ok_or_else(|| CliError::new(format!("unknown category: {name}")))?;
            catalog.candidates(category).iter().collect()
        }
        None => catalog.tools().collect(),
    };
    info!(tools = tools.len(), "catalog listed");
    let rendered = serde_json::to_string_pretty(&tools)
        .map_err(|err| CliError::new(format!("failed to serialize catalog: {err}")))?;
    write_stdout(&rendered)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
///
/// Logging starts after the config loads so `[logging].level` applies; a
/// config that fails to load falls back to the default level.
fn command_config(
    command: &ConfigCommand,
    config_path: Option<PathBuf>,
    flag_level: Option<LogLevel>,
) -> CliResult<ExitCode> {
    let loaded = load_config(config_path);
    let configured = loaded.as_ref().map_or(LogLevel::default(), |config| config.logging.level);
    init_logging(flag_level, configured);
    match command {
        ConfigCommand::Example => {
            write_stdout(&config_toml_example())?;
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Validate => {
            let config = loaded?;
            info!(
                max_input_bytes = config.input.max_input_bytes,
                format = config.output.format.as_str(),
                "config validated"
            );
            write_stdout_line("config ok")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Loads configuration from the resolved path.
fn load_config(path: Option<PathBuf>) -> CliResult<StackDecisionConfig> {
    StackDecisionConfig::load(path.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Converts CLI format selections into config output formats.
impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Pretty => Self::Pretty,
            FormatArg::Summary => Self::Summary,
        }
    }
}

/// Converts CLI log level selections into config log levels.
impl From<LogLevelArg> for LogLevel {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Trace => Self::Trace,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes text to stdout, adding a trailing newline when missing.
fn write_stdout(text: &str) -> CliResult<()> {
    if text.ends_with('\n') {
        let mut stdout = std::io::stdout();
        stdout.write_all(text.as_bytes()).map_err(|err| CliError::new(output_error("stdout", &err)))
    } else {
        write_stdout_line(text)
    }
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}").map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
