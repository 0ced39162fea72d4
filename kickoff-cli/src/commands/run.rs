//! `kickoff run <slug>`, `kickoff run --all` and the slug shortcuts.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use kickoff_core::{Project, Registry, RegistryError};
use kickoff_launcher::{launch, LaunchReport, SessionSpawner};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Project slug to run.
    pub slug: Option<String>,

    /// Run all projects.
    #[arg(long, short = 'a', conflicts_with = "slug")]
    pub all: bool,
}

impl RunArgs {
    pub fn run<S>(self, registry: &Registry, spawner: &mut S) -> Result<()>
    where
        S: SessionSpawner + ?Sized,
    {
        if self.all {
            return run_all(registry, spawner);
        }
        let slug = self.slug.context("provide a project slug or use --all")?;
        run_slug(registry, &slug, spawner)
    }
}

/// Launch the project registered as `slug`.
pub fn run_slug<S>(registry: &Registry, slug: &str, spawner: &mut S) -> Result<()>
where
    S: SessionSpawner + ?Sized,
{
    let project = registry.find(slug).ok_or_else(|| RegistryError::NotFound {
        slug: slug.to_owned(),
    })?;
    launch_project(project, spawner)?;
    Ok(())
}

/// Launch every project in stored order.
///
/// A project whose root is missing is reported and skipped; the rest still
/// launch. Fails afterwards if any project could not be launched.
pub fn run_all<S>(registry: &Registry, spawner: &mut S) -> Result<()>
where
    S: SessionSpawner + ?Sized,
{
    if registry.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    let mut failed = Vec::new();
    for project in registry {
        if let Err(err) = launch_project(project, spawner) {
            eprintln!("{} {err:#}", "✗".red().bold());
            failed.push(project.slug.to_string());
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} projects failed to launch ({})",
            failed.len(),
            registry.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

fn launch_project<S>(project: &Project, spawner: &mut S) -> Result<LaunchReport>
where
    S: SessionSpawner + ?Sized,
{
    let report = launch(project, spawner)?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &LaunchReport) {
    let started = report.issued.len();
    let summary = if report.is_clean() {
        format!("{started} started")
    } else {
        format!("{started} started, {} failed", report.failures.len())
    };
    let tick = if report.is_clean() {
        "✓".green().bold()
    } else {
        "!".yellow().bold()
    };
    println!(
        "{tick} Launching {} in {} ({summary})",
        report.slug,
        report.working_dir.display()
    );
}
