//! kickoff — personal workspace launcher.
//!
//! # Usage
//!
//! ```text
//! kickoff projects --add
//! kickoff projects --list
//! kickoff projects --run <slug>
//! kickoff projects --remove <slug>
//! kickoff run <slug>
//! kickoff run --all
//! kickoff <slug>
//! ```
//!
//! The registry is read once at startup; every registered slug becomes a
//! top-level shortcut for `run <slug>`.

mod commands;
mod config;
mod prompt;
mod shortcuts;

use anyhow::{Context, Result};
use clap::{FromArgMatches, Parser, Subcommand};

use commands::{projects::ProjectsArgs, run::RunArgs, Workspace};
use config::Config;
use kickoff_core::store;
use kickoff_launcher::TerminalSpawner;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "kickoff",
    version,
    about = "Open registered projects in ready-to-work terminal sessions",
    long_about = None,
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage projects.
    Projects(ProjectsArgs),

    /// Run a project.
    Run(RunArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("failed to resolve configuration")?;
    let registry = store::load_at(&config.registry_path).with_context(|| {
        format!(
            "failed to load registry at {}",
            config.registry_path.display()
        )
    })?;

    let matches = shortcuts::build_command(&registry).get_matches();
    let mut spawner = TerminalSpawner::new(config.terminal.clone());
    let mut workspace = Workspace::new(config.registry_path, registry);

    if let Some(slug) = shortcuts::shortcut_slug(&matches, &workspace.registry) {
        return commands::run::run_slug(&workspace.registry, slug, &mut spawner);
    }

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    match cli.command {
        Commands::Projects(args) => args.run(&mut workspace, &mut spawner),
        Commands::Run(args) => args.run(&workspace.registry, &mut spawner),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
