use crate::cargo::{apply_version, list_member_manifests};
use crate::config::{Config, load_publish_order, load_version};
use crate::dispatch::{Dispatcher, Executor, SystemExecutor};
use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Runs the release steps selected in `config` against real processes.
pub fn execute(config: &Config) -> Result<()> {
    let executor = SystemExecutor::new(&config.workspace);
    execute_with(config, executor)
}

/// Runs version stamping, tagging and publishing, in that order.
///
/// Both data files are read before anything else so a missing file fails
/// the run before any manifest is touched. There is no rollback: an error
/// leaves earlier steps applied.
pub fn execute_with<E: Executor>(config: &Config, executor: E) -> Result<()> {
    if config.dry_run {
        println!("{}", "running in dry mode".yellow());
    }

    let version = load_version(&config.workspace)?;
    let order = load_publish_order(&config.workspace)?;

    if !config.has_action() {
        println!("nothing to do :(");
        return Ok(());
    }

    if config.set_version {
        set_versions(config, &version)?;
    }

    let mut dispatcher = Dispatcher::new(executor, config.dry_run, config.keep_going);

    if config.tag {
        dispatcher.tag(&version)?;
    }

    if config.publish {
        dispatcher.publish(&order)?;
    }

    Ok(())
}

/// Stamps `version` into every workspace member, in declared order.
pub fn set_versions(config: &Config, version: &str) -> Result<()> {
    let manifests = list_member_manifests(&config.workspace)?;
    let mut changed = 0;

    for manifest in &manifests {
        println!(
            "{} v{} for {}",
            "setting version".green().bold(),
            version,
            relative(manifest, &config.workspace).display()
        );

        let outcome = apply_version(manifest, version, &config.prefix, config.dry_run)?;
        if outcome.changed {
            changed += 1;
        } else {
            log::debug!("{} already at v{}", manifest.display(), version);
        }
    }

    if !config.dry_run {
        println!(
            "{} {} of {} manifests to v{}",
            "✓ Updated".green().bold(),
            changed,
            manifests.len(),
            version
        );
    }

    Ok(())
}

fn relative<'a>(path: &'a Path, workspace: &Path) -> &'a Path {
    path.strip_prefix(workspace).unwrap_or(path)
}
