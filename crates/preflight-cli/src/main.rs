//! Preflight CLI - release-readiness gate for App Store Connect resources
//!
//! Reads a resolved snapshot JSON file, runs the matching validation and
//! prints the report. Exits non-zero when the report has blocking findings.
//!
//! ## Commands
//!
//! - `version`: build, review details, categories, pricing and availability
//! - `testflight`: build, beta review details and "What to Test" notes
//! - `iap`: in-app purchase review readiness
//! - `subscriptions`: subscription review readiness

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, Level};

use preflight_core::{
    load_input, render_table, validate_iap, validate_subscriptions, validate_testflight,
    validate_version, IapInput, SubscriptionsInput, TestFlightInput, ValidationReport,
    VersionInput,
};

#[derive(Parser)]
#[command(name = "preflight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Release-readiness validation for App Store Connect", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an App Store version before submission
    Version(CommandArgs),

    /// Validate TestFlight build readiness before distribution
    Testflight(CommandArgs),

    /// Validate in-app purchase review readiness
    Iap(CommandArgs),

    /// Validate subscription review readiness
    Subscriptions(CommandArgs),
}

#[derive(Args, Clone)]
struct CommandArgs {
    /// Snapshot JSON file describing the resolved resources
    #[arg(short, long)]
    input: PathBuf,

    /// App ID overriding the one in the snapshot
    #[arg(long, env = "PREFLIGHT_APP_ID")]
    app: Option<String>,

    /// Treat warnings as blocking (exit non-zero)
    #[arg(long, env = "PREFLIGHT_STRICT")]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json", env = "PREFLIGHT_OUTPUT")]
    output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    preflight_core::init_tracing(cli.log_json, level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut out)
}

/// Assembler inputs that carry an app ID the `--app` flag can override.
trait AppScoped {
    fn set_app_id(&mut self, app_id: String);
}

macro_rules! impl_app_scoped {
    ($($ty:ty),+) => {
        $(impl AppScoped for $ty {
            fn set_app_id(&mut self, app_id: String) {
                self.app_id = app_id;
            }
        })+
    };
}

impl_app_scoped!(VersionInput, TestFlightInput, IapInput, SubscriptionsInput);

/// Run one command, writing the report to `out`.
///
/// The report is always written first; a blocking report then becomes an
/// error so the process exits non-zero.
fn execute<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Version(args) => run(&args, out, validate_version),
        Commands::Testflight(args) => run(&args, out, validate_testflight),
        Commands::Iap(args) => run(&args, out, validate_iap),
        Commands::Subscriptions(args) => run(&args, out, validate_subscriptions),
    }
}

fn run<I, R, W>(args: &CommandArgs, out: &mut W, validate: fn(&I, bool) -> R) -> Result<()>
where
    I: DeserializeOwned + AppScoped,
    R: ValidationReport + Serialize,
    W: Write,
{
    let mut input: I = read_input(&args.input)?;
    if let Some(app) = args.app.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        input.set_app_id(app.to_string());
    }

    let report = validate(&input, args.strict);
    print_report(out, &report, args.output, args.pretty)?;

    let summary = report.summary();
    info!(
        command = report.command(),
        blocking = summary.blocking,
        "validation complete"
    );
    if report.is_blocking() {
        bail!(
            "validate {}: found {} blocking issue(s)",
            report.command(),
            summary.blocking
        );
    }
    Ok(())
}

fn read_input<I: DeserializeOwned>(path: &Path) -> Result<I> {
    load_input(path).with_context(|| format!("Failed to load snapshot {}", path.display()))
}

fn print_report<R, W>(out: &mut W, report: &R, format: OutputFormat, pretty: bool) -> Result<()>
where
    R: ValidationReport + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Table => write!(out, "{}", render_table(report))?,
    }
    Ok(())
}
