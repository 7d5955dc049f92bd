//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use plugreq::core::models::Flavor;
use plugreq::output::OutputMode;

/// plugreq - Custom default settings plugin requests
#[derive(Parser, Debug)]
#[command(
    name = "plugreq",
    version,
    about = "Validate, moderate and submit plugin requests",
    long_about = "Validate custom default settings line by line.\n\n\
                  Requests with unrecognized lines are edited or rejected;\n\
                  valid requests are sent to the plugin builder."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/plugreq/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify lines and report kept and useless ones
    Check {
        /// Input file, or `-` for stdin
        input: String,

        /// Rule set: settings, input-params
        #[arg(short, long, default_value = "settings")]
        flavor: Flavor,

        /// Split on `\r\n` instead of `\n`
        #[arg(long)]
        crlf: bool,
    },

    /// Moderate a plugin request issue (used by CI)
    Moderate {
        /// Event payload (defaults to $GITHUB_EVENT_PATH)
        #[arg(long)]
        event: Option<PathBuf>,

        /// Repository as owner/name (overrides the event)
        #[arg(long)]
        repo: Option<String>,

        /// Issue number (overrides the event)
        #[arg(long)]
        issue: Option<u64>,

        /// Read the issue body from a file instead of the event
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Directory for marker files
        #[arg(long)]
        marker_dir: Option<PathBuf>,

        /// Show the planned actions without calling the tracker
        #[arg(long)]
        dry_run: bool,
    },

    /// Request a plugin from the builder
    Make {
        /// Where to save the archive
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,

        #[command(subcommand)]
        action: MakeAction,
    },

    /// Print the C source of a custom default settings plugin
    Source {
        /// Input file, or `-` for stdin
        input: String,
    },

    /// List request kinds and their fields
    Kinds,

    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum MakeAction {
    /// Custom default settings
    Settings {
        /// Input file, or `-` for stdin
        input: String,

        /// Write the normalized lines back to the input file
        #[arg(long)]
        rewrite: bool,
    },

    /// Map a button to a touch screen position
    ButtonToTouch {
        /// Touch X coordinate
        #[arg(long)]
        x: u16,

        /// Touch Y coordinate
        #[arg(long)]
        y: u16,

        /// Serialized input parameters
        #[arg(long)]
        params: String,
    },

    /// Fixed window size
    WindowSize {
        /// Width in pixels
        #[arg(long)]
        width: u32,

        /// Height in pixels
        #[arg(long)]
        height: u32,
    },

    /// Fixed window position
    WindowPosition {
        /// X in pixels
        #[arg(long, allow_hyphen_values = true)]
        x: i32,

        /// Y in pixels
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
    },

    /// Log to a file
    LogFile {
        /// Log file path
        path: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Check { input, flavor, crlf }) => {
            commands::check(&input, flavor, crlf, output_mode)
        },
        Some(Command::Moderate {
            event,
            repo,
            issue,
            body_file,
            marker_dir,
            dry_run,
        }) => commands::moderate(
            &config,
            commands::ModerateArgs {
                event,
                repo,
                issue,
                body_file,
                marker_dir,
                dry_run,
            },
            output_mode,
        ),
        Some(Command::Make { output, action }) => {
            commands::make(&config, action, output, output_mode)
        },
        Some(Command::Source { input }) => commands::source(&input),
        Some(Command::Kinds) => commands::kinds(output_mode),
        Some(Command::Config { init }) => {
            commands::config_cmd(&config, cli.config.as_deref(), init, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("plugreq v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("plugreq v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'plugreq --help' for usage");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
