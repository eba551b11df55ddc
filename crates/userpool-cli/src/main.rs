// crates/userpool-cli/src/main.rs
// ============================================================================
// Module: User Pool Plan CLI Entry Point
// Description: Command dispatcher for config validation and plan output.
// Purpose: Provide a localized CLI over the config pipeline and resolver.
// Dependencies: clap, thiserror, userpool-cli, userpool-config, userpool-core
// ============================================================================

//! ## Overview
//! `userpool-plan` loads a user pool configuration, validates it, and prints
//! the resource intents the resolver composes. It never talks to a cloud
//! provider. All user-facing strings are routed through the i18n catalog.
//! Configuration files are untrusted input and go through the bounded loader
//! in `userpool-config`.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

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
use thiserror::Error;
use userpool_cli::audit::FileAuditSink;
use userpool_cli::audit::NoopAuditSink;
use userpool_cli::audit::PlanAuditEvent;
use userpool_cli::audit::PlanAuditSink;
use userpool_cli::audit::StderrAuditSink;
use userpool_cli::i18n::Locale;
use userpool_cli::i18n::set_locale;
use userpool_cli::report::PlanReport;
use userpool_cli::t;
use userpool_config::RawConfig;
use userpool_config::ValidationError;
use userpool_config::config_schema;
use userpool_config::config_toml_example;
use userpool_config::plan;
use userpool_config::validate;
use userpool_core::canonical_json_bytes;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "USERPOOL_PLAN_LANG";
/// `--audit-log` value selecting stderr.
const AUDIT_STDERR: &str = "-";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "userpool-plan", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `USERPOOL_PLAN_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Validate a configuration and print the planned resource intents.
    Plan(PlanCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a user pool configuration file.
    Validate(ConfigValidateCommand),
    /// Print the JSON schema of the configuration file.
    Schema,
    /// Print a canonical example configuration.
    Example,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to userpool.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `plan`.
#[derive(Args, Debug)]
struct PlanCommand {
    /// Optional config file path (defaults to userpool.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = PlanFormat::Json)]
    format: PlanFormat,
    /// Append a JSON audit line to PATH, or to stderr when PATH is `-`.
    #[arg(long = "audit-log", value_name = "PATH")]
    audit_log: Option<PathBuf>,
}

/// Output formats for `plan`.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum PlanFormat {
    /// Canonical JSON report.
    Json,
    /// Human-readable Markdown summary.
    Markdown,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Where plan audit events go.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AuditTarget {
    /// Discard events.
    Disabled,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File(PathBuf),
}

impl AuditTarget {
    /// Interprets the `--audit-log` argument.
    fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::Disabled,
            Some(path) if path.as_os_str() == AUDIT_STDERR => Self::Stderr,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    /// Opens the sink for this target.
    fn open(&self) -> CliResult<Box<dyn PlanAuditSink>> {
        match self {
            Self::Disabled => Ok(Box::new(NoopAuditSink)),
            Self::Stderr => Ok(Box::new(StderrAuditSink)),
            Self::File(path) => {
                let sink = FileAuditSink::new(path).map_err(|err| {
                    CliError::new(t!("audit.open_failed", path = path.display(), error = err))
                })?;
                Ok(Box::new(sink))
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
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
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
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
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Plan(command) => command_plan(&command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let help = Cli::command().render_help().to_string();
    write_stdout_line(&help).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Schema => command_config_schema(),
        ConfigCommand::Example => command_config_example(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let raw = RawConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    match validate(&raw.document) {
        Ok(_) => {
            write_stdout_line(&t!("config.validate.ok", path = raw.path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => report_violations(&error),
    }
}

/// Prints the configuration JSON schema.
fn command_config_schema() -> CliResult<ExitCode> {
    let rendered = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(t!("config.schema.serialize_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the canonical example configuration.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_bytes(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Plan Command
// ============================================================================

/// Executes the plan command.
fn command_plan(command: &PlanCommand) -> CliResult<ExitCode> {
    let sink = AuditTarget::from_arg(command.audit_log.as_deref()).open()?;
    let raw = match RawConfig::load(command.config.as_deref()) {
        Ok(raw) => raw,
        Err(err) => {
            sink.record(&PlanAuditEvent::load_failed(command.config.as_deref()));
            return Err(CliError::new(t!("config.load_failed", error = err)));
        }
    };
    let composed = match plan(&raw.document) {
        Ok(composed) => composed,
        Err(error) => {
            sink.record(&PlanAuditEvent::rejected(&raw.path, error.violations().len()));
            return report_violations(&error);
        }
    };
    let report = PlanReport::new(&raw.path, &composed)
        .map_err(|err| CliError::new(t!("plan.digest_failed", error = err)))?;
    sink.record(&PlanAuditEvent::composed(&raw.path, report.intent_count, &report.plan_digest));
    let output = match command.format {
        PlanFormat::Json => {
            let mut bytes = canonical_json_bytes(&report)
                .map_err(|err| CliError::new(t!("plan.serialize_failed", error = err)))?;
            bytes.push(b'\n');
            bytes
        }
        PlanFormat::Markdown => report.render_markdown().into_bytes(),
    };
    write_stdout_bytes(&output).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Prints every violation to stderr and returns a failure exit code.
fn report_violations(error: &ValidationError) -> CliResult<ExitCode> {
    let mut message = t!("config.invalid.header", count = error.violations().len());
    for violation in error.violations() {
        message.push('\n');
        message.push_str(&t!(
            "config.invalid.entry",
            path = violation.path,
            rule = violation.rule,
            kind = violation.kind
        ));
    }
    write_stderr_line(&message).map_err(|err| CliError::new(output_error("stderr", &err)))?;
    Ok(ExitCode::FAILURE)
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
