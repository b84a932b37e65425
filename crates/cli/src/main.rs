mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Tick story toolchain.
#[derive(Parser)]
#[command(name = "tick", version, about = "Tick story toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a story for consistency between declarations and state machine
    Validate {
        /// Path to the story JSON file
        story: PathBuf,
        /// Comma-separated list of checks to run. Default: all.
        #[arg(long)]
        check: Option<String>,
        /// Registered action handlers, added to those of the config file
        #[arg(long, value_delimiter = ',')]
        handlers: Vec<String>,
        /// Known story ids, added to those of the config file
        #[arg(long, value_delimiter = ',')]
        stories: Vec<String>,
        /// Path to a tick.toml file (default: ./tick.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a story document against the Tick story JSON Schema
    Lint {
        /// Path to the story JSON file
        story: PathBuf,
    },

    /// Check the state machine and list its states and transitions
    Inspect {
        /// Path to the story JSON file
        file: PathBuf,
        /// The file holds a bare state machine rather than a story
        #[arg(long)]
        machine: bool,
    },

    /// Resolve the state reached when an intent fires
    Next {
        /// Path to the story JSON file
        file: PathBuf,
        /// Current state id
        #[arg(long)]
        state: String,
        /// Intent or trigger name
        #[arg(long)]
        intent: String,
        /// The file holds a bare state machine rather than a story
        #[arg(long)]
        machine: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match cli.command {
        Commands::Validate {
            story,
            check,
            handlers,
            stories,
            config,
        } => {
            commands::validate::cmd_validate(
                &story,
                commands::validate::ValidateArgs {
                    checks: check.as_deref(),
                    handlers,
                    stories,
                    config: config.as_deref(),
                },
                cli.output,
                cli.quiet,
            );
        }
        Commands::Lint { story } => {
            commands::lint::cmd_lint(&story, cli.output, cli.quiet);
        }
        Commands::Inspect { file, machine } => {
            commands::inspect::cmd_inspect(&file, machine, cli.output, cli.quiet);
        }
        Commands::Next {
            file,
            state,
            intent,
            machine,
        } => {
            commands::next::cmd_next(&file, &state, &intent, machine, cli.output, cli.quiet);
        }
    }
}

/// Logs go to stderr so that stdout only carries command output.
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
