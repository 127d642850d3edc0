//! guess-number CLI
//!
//! Find the secret number between 1 and 100 in five attempts.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guess_number::controller::GuessController;
use guess_number::line;
use guess_number::surface::TextSurface;
use guess_number::tui;
use guess_number::types::{DIAGNOSTICS_TARGET, GameConfig, OutputFormat};

/// Env var overriding the log filter.
const LOG_ENV: &str = "GUESS_NUMBER_LOG";

#[derive(Parser)]
#[command(name = "guess-number")]
#[command(about = "Guess the secret number between 1 and 100 in five attempts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log the secret number at startup (developer aid)
    #[arg(long, global = true)]
    diagnostics: bool,

    /// Seed for the secret number, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal UI (default)
    Tui,

    /// Play on stdin/stdout, one guess per line
    Plain {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = GameConfig {
        diagnostics_enabled: cli.diagnostics,
        seed: cli.seed,
    };

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => cmd_tui(&config, cli.log_file.as_deref(), cli.verbose),
        Commands::Plain { format } => {
            cmd_plain(&config, format.into(), cli.log_file.as_deref(), cli.verbose)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Build the log filter: `GUESS_NUMBER_LOG` wins, otherwise warn (debug with -v).
/// Diagnostics always get through when requested.
fn log_filter(verbose: bool, diagnostics: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    if diagnostics {
        match format!("{DIAGNOSTICS_TARGET}=info").parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    } else {
        filter
    }
}

/// Install the tracing subscriber, writing to `log_file` or stderr.
fn init_tracing(config: &GameConfig, log_file: Option<&Path>, verbose: bool) -> Result<(), String> {
    let filter = log_filter(verbose, config.diagnostics_enabled);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot create log file {}: {}", path.display(), e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|e| format!("failed to initialize tracing subscriber: {e}"))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(config: &GameConfig, log_file: Option<&Path>, verbose: bool) -> Result<(), String> {
    match log_file {
        Some(_) => init_tracing(config, log_file, verbose)?,
        None if config.diagnostics_enabled => {
            return Err(
                "--diagnostics in the terminal UI needs --log-file <PATH>; \
                 the screen is owned by the game"
                    .to_string(),
            );
        }
        None => {} // nowhere safe to log
    }

    tui::run::run(config).map_err(|e| format!("terminal error: {e}"))
}

fn cmd_plain(
    config: &GameConfig,
    format: OutputFormat,
    log_file: Option<&Path>,
    verbose: bool,
) -> Result<(), String> {
    init_tracing(config, log_file, verbose)?;

    let mut game = GuessController::new(TextSurface::new(), config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    line::play(&mut game, stdin.lock(), stdout.lock(), format).map_err(|e| e.to_string())
}
