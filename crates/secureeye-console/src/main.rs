//! Secure Eye console
//!
//! Runs the admin approval queue or the user camera panel as a line-oriented
//! session on stdin/stdout.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use clap::{Parser, Subcommand, ValueEnum};
use secureeye_console::{ConsoleNavigator, Session, run};
use secureeye_core::{Config, Error, Result, SeedSet, init_logging, seed_store};
use secureeye_protocol::{AdminDashboard, AdminMessage, UserDashboard};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

/// Command line interface for the Secure Eye console
#[derive(Parser)]
#[command(
    name = "secureeye",
    version = env!("CARGO_PKG_VERSION"),
    about = "Camera record management dashboards for Secure Eye",
    long_about = "Review registered cameras as an administrator, or manage your own cameras, from a line-oriented console session."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format (json, pretty); overrides the config file
    #[arg(long)]
    log_format: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Review and decide on registered cameras
    Admin {
        /// Camera records to load instead of the built-in fixtures
        #[arg(long, value_name = "FILE")]
        seed_file: Option<PathBuf>,

        /// Initial search text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View, edit and delete your cameras
    User {
        /// Camera records to load instead of the built-in fixtures
        #[arg(long, value_name = "FILE")]
        seed_file: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,

        /// Validate configuration
        #[arg(short, long)]
        validate: bool,
    },

    /// Print a built-in fixture set as JSON
    Seed {
        /// Which fixture set
        #[arg(value_enum, default_value_t = SeedArg::Admin)]
        set: SeedArg,
    },
}

/// Fixture set selector
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeedArg {
    /// Admin approval queue
    Admin,
    /// User camera panel
    User,
}

impl From<SeedArg> for SeedSet {
    fn from(arg: SeedArg) -> Self {
        match arg {
            SeedArg::Admin => Self::Admin,
            SeedArg::User => Self::User,
        }
    }
}

/// Main entry point for the console
///
/// # Errors
///
/// Returns error if configuration, logging or the session fails
fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        // It's okay if .env doesn't exist
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if let Some(format) = &cli.log_format {
        config.logging.format.clone_from(format);
    }
    if cli.json {
        config.logging.format = "json".to_string();
    }

    init_logging(&config.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Secure Eye console starting");

    match cli.command {
        Some(Commands::Admin { seed_file, search }) => {
            if seed_file.is_some() {
                config.dashboard.seed_file = seed_file;
            }
            if let Some(search) = search {
                config.dashboard.initial_search = search;
            }
            run_admin(&config)
        }
        Some(Commands::User { seed_file }) => {
            if seed_file.is_some() {
                config.dashboard.seed_file = seed_file;
            }
            run_user(&config)
        }
        Some(Commands::Config { show, validate }) => handle_config_command(&config, show, validate),
        Some(Commands::Seed { set }) => print_seed(set.into()),
        None => run_admin(&config),
    }
}

/// Load configuration from file or environment
///
/// # Errors
///
/// Returns error if the configuration cannot be read or parsed
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

/// Run the admin approval queue session
///
/// # Errors
///
/// Returns error if the store cannot be seeded or the terminal fails
fn run_admin(config: &Config) -> Result<()> {
    let store = seed_store(&config.dashboard, SeedSet::Admin)?;
    let mut dashboard = AdminDashboard::new(store);
    if !config.dashboard.initial_search.is_empty() {
        dashboard.update(AdminMessage::SearchChanged(
            config.dashboard.initial_search.clone(),
        ));
    }
    run_session(&mut dashboard)
}

/// Run the user camera panel session
///
/// # Errors
///
/// Returns error if the store cannot be seeded or the terminal fails
fn run_user(config: &Config) -> Result<()> {
    let store = seed_store(&config.dashboard, SeedSet::User)?;
    let mut dashboard = UserDashboard::new(store, ConsoleNavigator::new());
    run_session(&mut dashboard)
}

fn run_session<S: Session>(session: &mut S) -> Result<()> {
    println!("Type 'help' for commands, 'quit' to leave.");
    run(session, io::stdin().lock(), io::stdout().lock())?;
    info!("Session ended");
    Ok(())
}

/// Print a fixture set as JSON
///
/// # Errors
///
/// Returns error if the records cannot be serialized
fn print_seed(set: SeedSet) -> Result<()> {
    let json = serde_json::to_string_pretty(&set.records())?;
    println!("{json}");
    Ok(())
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns error if configuration cannot be serialized or is invalid
fn handle_config_command(config: &Config, show: bool, validate: bool) -> Result<()> {
    if validate {
        validate_config(config)?;
    }

    if show {
        println!("{}", config.to_toml()?);
    }

    Ok(())
}

/// Validate the seed file and logging settings
///
/// # Errors
///
/// Returns error if the seed file is set but unusable
fn validate_config(config: &Config) -> Result<()> {
    info!("Validating configuration...");

    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        warn!(format = %config.logging.format, "Unknown log format, using pretty");
    }

    if let Some(path) = &config.dashboard.seed_file {
        let records = secureeye_core::load_seed_file(path).map_err(|e| {
            Error::configuration(format!("Seed file {} is unusable: {e}", path.display()))
        })?;
        println!("Seed file {} holds {} cameras", path.display(), records.len());
    }

    info!("Configuration validation completed");
    Ok(())
}
