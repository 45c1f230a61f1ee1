use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tasklist_core::load_user_config;
use tracing_subscriber::EnvFilter;

/// Always-on-top task list widget.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Lua config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Title shown in the drag bar
    #[arg(long)]
    title: Option<String>,

    /// Start with these tasks, in order
    #[arg(long = "task", value_name = "TEXT")]
    tasks: Vec<String>,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = load_user_config(cli.config.as_deref()).context("loading config")?;
    if let Some(title) = cli.title {
        settings.config.title = title;
    }

    tasklist_gui::run_gui(settings.config, settings.keymap, cli.tasks)
}
