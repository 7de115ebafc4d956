//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands;
use checklist_gate::output::OutputMode;

/// checklist-gate - Required checklist items for pull requests
#[derive(Parser, Debug)]
#[command(
    name = "checklist-gate",
    version,
    about = "Required checklist items for pull requests",
    long_about = "Fail a pull request check until every required checklist item\n\
                  appears in the description with an accepted status.\n\n\
                  Accepted statuses: [x], [X], [✔], [NA] (and [✖] when declined items pass)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the gate against the triggering pull request
    Check(CheckArgs),

    /// List the checklist entries found in a description
    Inspect {
        /// Read the description from this file instead of the event payload
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Event payload path
        #[arg(long, env = "GITHUB_EVENT_PATH", hide_env_values = true)]
        event: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Write a starter config and checklist items file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Arguments of the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Event payload path
    #[arg(long, env = "GITHUB_EVENT_PATH", hide_env_values = true)]
    pub event: Option<PathBuf>,

    /// Required checklist items, one per line
    #[arg(long, env = "INPUT_CHECKLIST_LINES", hide_env_values = true)]
    pub items: Option<String>,

    /// File with required checklist items, one per line
    #[arg(long)]
    pub items_file: Option<PathBuf>,

    /// Excluded author logins, one per line
    #[arg(long, env = "INPUT_EXCLUDED_AUTHORS", hide_env_values = true)]
    pub exclusions: Option<String>,

    /// File with excluded author logins, one per line
    #[arg(long)]
    pub exclusions_file: Option<PathBuf>,

    /// When to emit GitHub workflow annotations
    #[arg(long, value_enum, default_value_t = AnnotationMode::Auto)]
    pub annotations: AnnotationMode,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Status vocabulary overrides shared by `check` and `inspect`
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Settings file (default: .checklist-gate.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Status vocabulary: checkbox, glyph, extended
    #[arg(long)]
    pub vocabulary: Option<String>,

    /// Meaning of [✖]: fail, pass
    #[arg(long)]
    pub declined: Option<String>,
}

/// When to emit workflow annotations
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationMode {
    /// Only when GITHUB_ACTIONS=true
    Auto,
    /// Always
    Github,
    /// Never
    None,
}

/// Run the CLI
///
/// Returns whether the gate passed. Commands other than `check` pass
/// unless they fail with an error.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check(args)) => commands::check(&args, output_mode),
        Some(Command::Inspect {
            body_file,
            event,
            policy,
        }) => commands::inspect(body_file.as_deref(), event, &policy, output_mode).map(|()| true),
        Some(Command::Init { force }) => commands::init(force, output_mode).map(|()| true),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("checklist-gate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(true)
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
                println!("checklist-gate v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'checklist-gate --help' for usage");
                println!("Run 'checklist-gate check' in a pull_request workflow");
            }
            Ok(true)
        },
    }
}
