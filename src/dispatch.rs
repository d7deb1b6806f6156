//! External command execution for tagging and publishing.
//!
//! Every command is printed before it runs. In dry-run mode printing is all
//! that happens. Commands run one at a time; each blocks until the child
//! process exits.

use crate::error::{ReleaseError, Result};
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `git commit -a -m v<version>`
    pub fn commit(version: &str) -> Self {
        let name = tag_name(version);
        Self::new("git", ["commit", "-a", "-m", name.as_str()])
    }

    /// `git tag v<version>`
    pub fn tag(version: &str) -> Self {
        let name = tag_name(version);
        Self::new("git", ["tag", name.as_str()])
    }

    /// `cargo publish -p <package>`
    pub fn publish(package: &str) -> Self {
        Self::new("cargo", ["publish", "-p", package])
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

pub fn tag_name(version: &str) -> String {
    format!("v{}", version)
}

/// Runs an [`Invocation`] to completion.
pub trait Executor {
    /// # Errors
    ///
    /// `CommandSpawn` if the process cannot start, `CommandFailed` if it
    /// exits unsuccessfully.
    fn execute(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Spawns real processes with inherited stdio.
pub struct SystemExecutor {
    cwd: PathBuf,
}

impl SystemExecutor {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Executor for SystemExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<()> {
        log::debug!("Spawning `{}` in {}", invocation, self.cwd.display());

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|source| ReleaseError::CommandSpawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ReleaseError::CommandFailed {
                command: invocation.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Dry-run-aware, strictly sequential command runner.
pub struct Dispatcher<E: Executor> {
    executor: E,
    dry_run: bool,
    keep_going: bool,
}

impl<E: Executor> Dispatcher<E> {
    /// With `keep_going`, a failed command is reported as a warning and the
    /// sequence continues; otherwise the first failure is returned.
    pub fn new(executor: E, dry_run: bool, keep_going: bool) -> Self {
        Self {
            executor,
            dry_run,
            keep_going,
        }
    }

    #[cfg(test)]
    fn executor(&self) -> &E {
        &self.executor
    }

    /// Prints the command, then runs it unless in dry-run mode.
    pub fn run(&mut self, invocation: &Invocation) -> Result<()> {
        println!("{} {}", "running".cyan(), invocation);
        if self.dry_run {
            return Ok(());
        }

        match self.executor.execute(invocation) {
            Err(e) if self.keep_going => {
                log::debug!("Continuing after failure: {:?}", e);
                eprintln!("{} {}", "warning:".yellow().bold(), e);
                Ok(())
            }
            result => result,
        }
    }

    /// Commits all working-tree changes as `v<version>`, then tags `v<version>`.
    pub fn tag(&mut self, version: &str) -> Result<()> {
        println!("{} {}", "tagging".green().bold(), tag_name(version));
        self.run(&Invocation::commit(version))?;
        self.run(&Invocation::tag(version))
    }

    /// Publishes each package in `order`, one after another.
    pub fn publish(&mut self, order: &[String]) -> Result<()> {
        for package in order {
            println!("{} {}", "publishing".green().bold(), package);
            self.run(&Invocation::publish(package))?;
        }
        Ok(())
    }
}
