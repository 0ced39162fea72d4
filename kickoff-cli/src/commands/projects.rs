//! `kickoff projects --add | --list | --run <slug> | --remove <slug>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use kickoff_core::{
    register, store, validate_slug, ProjectDraft, Registry, DEFAULT_STARTUP_COMMAND,
};
use kickoff_launcher::SessionSpawner;

use super::Workspace;
use crate::prompt::{Prompter, TerminalPrompter};

/// Manage projects.
#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
#[group(id = "action", multiple = false)]
pub struct ProjectsArgs {
    /// Add a new project.
    #[arg(long, short = 'a')]
    pub add: bool,

    /// List all projects.
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Run a project.
    #[arg(long, short = 'r', value_name = "SLUG")]
    pub run: Option<String>,

    /// Remove a project.
    #[arg(long, value_name = "SLUG")]
    pub remove: Option<String>,
}

impl ProjectsArgs {
    pub fn run<S>(self, workspace: &mut Workspace, spawner: &mut S) -> Result<()>
    where
        S: SessionSpawner + ?Sized,
    {
        if self.add {
            add(workspace, &mut TerminalPrompter::default())
        } else if self.list {
            print!("{}", render_list(&workspace.registry));
            Ok(())
        } else if let Some(slug) = self.run {
            super::run::run_slug(&workspace.registry, &slug, spawner)
        } else if let Some(slug) = self.remove {
            remove(workspace, &slug)
        } else {
            // clap enforces one action via `arg_required_else_help`.
            Ok(())
        }
    }
}

/// `Projects:` followed by `- slug (rootPath)` per entry, or the empty notice.
pub fn render_list(registry: &Registry) -> String {
    if registry.is_empty() {
        return "No projects found.\n".to_string();
    }
    let mut out = String::from("Projects:\n");
    for project in registry {
        out.push_str(&format!(
            "- {} ({})\n",
            project.slug,
            project.root_path.display()
        ));
    }
    out
}

/// Interactively collect a project, register it and persist the registry.
pub fn add(workspace: &mut Workspace, prompter: &mut dyn Prompter) -> Result<()> {
    let root_path = prompter.input(
        "Enter the root folder path of the project:",
        None,
        &|value: &str| {
            if value.trim().is_empty() {
                Err("Root path must not be empty.".to_string())
            } else {
                Ok(())
            }
        },
    )?;

    let registry = &workspace.registry;
    let slug = prompter.input("Enter a unique slug for the project:", None, &|value: &str| {
        validate_slug(registry, value)
            .map(|_| ())
            .map_err(|err| err.to_string())
    })?;

    let run_docker = prompter.confirm(
        "Should the project automatically run docker compose up?",
        true,
    )?;
    let run_nvim = prompter.confirm("Should the project automatically run neovim?", true)?;
    let startup = prompter.input(
        "Enter startup commands",
        Some(DEFAULT_STARTUP_COMMAND),
        &|_: &str| Ok(()),
    )?;

    let draft = ProjectDraft {
        root_path: PathBuf::from(root_path.trim()),
        slug,
        run_docker,
        run_nvim,
        startup_commands: Some(startup).filter(|s| !s.trim().is_empty()),
    };
    let slug = register(&mut workspace.registry, draft).context("failed to register project")?;
    store::save_at(&workspace.registry_path, &workspace.registry)
        .context("failed to save registry")?;

    println!("{} Project {slug} added successfully!", "✓".green());
    Ok(())
}

/// Remove `slug` and persist. The file is untouched when `slug` is absent.
pub fn remove(workspace: &mut Workspace, slug: &str) -> Result<()> {
    workspace.registry.remove(slug)?;
    store::save_at(&workspace.registry_path, &workspace.registry)
        .context("failed to save registry")?;
    println!("{} Project {slug} removed successfully!", "✓".green());
    Ok(())
}
