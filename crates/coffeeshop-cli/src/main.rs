// coffeeshop-cli/src/main.rs
// ============================================================================
// Module: Coffeeshop CLI Entry Point
// Description: Command dispatcher for coffeeshop configuration workflows.
// Purpose: Validate, inspect, and scaffold environment configuration.
// Dependencies: clap, coffeeshop-config, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The coffeeshop CLI loads, validates, and prints the environment
//! configuration, and generates its artifacts (example TOML, markdown docs,
//! JSON schema). All user-facing strings are routed through the i18n catalog
//! to prepare for future localization. Configuration inputs are untrusted
//! and fail closed on validation errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use coffeeshop_cli::t;
use coffeeshop_config::DEFAULT_CONFIG_NAME;
use coffeeshop_config::DeployTarget;
use coffeeshop_config::EnvironmentConfig;
use coffeeshop_config::config_docs_markdown;
use coffeeshop_config::config_schema;
use coffeeshop_config::config_toml_example;
use coffeeshop_config::write_config_docs;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "coffeeshop", about = "Coffeeshop environment configuration tooling.")]
struct Cli {
    /// Print the CLI version and exit.
    #[arg(long, action = ArgAction::SetTrue)]
    version: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration workflows.
    Config(ConfigCommand),
}

/// Config command group.
#[derive(Args, Debug)]
struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    command: ConfigSubcommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Load and validate the configuration.
    Validate(ConfigValidateCommand),
    /// Print the effective configuration as pretty JSON.
    Show(ConfigShowCommand),
    /// Write the canonical example configuration.
    Init(ConfigInitCommand),
    /// Print or write the configuration field reference.
    Docs(ConfigDocsCommand),
    /// Print the configuration JSON schema.
    Schema,
}

/// Deploy target argument for config loading.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum TargetArg {
    /// Local development; falls back to the built-in variant.
    Development,
    /// Production; requires an explicit config file or env overrides.
    Production,
}

impl From<TargetArg> for DeployTarget {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Development => Self::Development,
            TargetArg::Production => Self::Production,
        }
    }
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to coffeeshop.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Deploy target; enables the built-in fallback for development.
    #[arg(long, value_enum, value_name = "TARGET")]
    target: Option<TargetArg>,
}

/// Arguments for printing the effective configuration.
#[derive(Args, Debug)]
struct ConfigShowCommand {
    /// Optional config file path (defaults to coffeeshop.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Deploy target; enables the built-in fallback for development.
    #[arg(long, value_enum, value_name = "TARGET")]
    target: Option<TargetArg>,
}

/// Arguments for writing the example configuration.
#[derive(Args, Debug)]
struct ConfigInitCommand {
    /// Output path for the example configuration.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_NAME)]
    output: PathBuf,
    /// Overwrite an existing file.
    #[arg(long, action = ArgAction::SetTrue)]
    force: bool,
}

/// Arguments for generating configuration docs.
#[derive(Args, Debug)]
struct ConfigDocsCommand {
    /// Optional output path; prints to stdout when omitted.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a localized message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
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

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments and dispatches the selected command.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Config(command) => command_config(command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command.command {
        ConfigSubcommand::Validate(command) => command_config_validate(&command),
        ConfigSubcommand::Show(command) => command_config_show(&command),
        ConfigSubcommand::Init(command) => command_config_init(&command),
        ConfigSubcommand::Docs(command) => command_config_docs(&command),
        ConfigSubcommand::Schema => command_config_schema(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    load_config(command.config.as_deref(), command.target)?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config show command.
fn command_config_show(command: &ConfigShowCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref(), command.target)?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|err| CliError::new(t!("config.show.serialize_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config init command.
fn command_config_init(command: &ConfigInitCommand) -> CliResult<ExitCode> {
    if command.output.exists() && !command.force {
        return Err(CliError::new(t!(
            "config.init.exists",
            path = command.output.display()
        )));
    }
    fs::write(&command.output, config_toml_example()).map_err(|err| {
        CliError::new(t!(
            "config.init.write_failed",
            path = command.output.display(),
            error = err
        ))
    })?;
    write_stdout_line(&t!("config.init.ok", path = command.output.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config docs command.
fn command_config_docs(command: &ConfigDocsCommand) -> CliResult<ExitCode> {
    match &command.output {
        Some(path) => {
            write_config_docs(Some(path)).map_err(|err| {
                CliError::new(t!(
                    "config.docs.write_failed",
                    path = path.display(),
                    error = err
                ))
            })?;
            write_stdout_line(&t!("config.docs.ok", path = path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        None => {
            let docs = config_docs_markdown()
                .map_err(|err| CliError::new(t!("config.docs.generate_failed", error = err)))?;
            write_stdout_bytes(docs.as_bytes())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the config schema command.
fn command_config_schema() -> CliResult<ExitCode> {
    let rendered = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(t!("config.schema.serialize_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads configuration, honoring an optional deploy target fallback.
fn load_config(path: Option<&Path>, target: Option<TargetArg>) -> CliResult<EnvironmentConfig> {
    let result = match target {
        Some(target) => EnvironmentConfig::load_or_builtin(target.into(), path),
        None => EnvironmentConfig::load(path),
    };
    result.map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
