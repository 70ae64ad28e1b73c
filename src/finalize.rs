//! Follow-up actions after the rewrite: dependency install and self-deletion.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::constants::composer;
use crate::error::{Error, Result};
use crate::ioutils::remove_file;
use crate::workspace::WorkingTree;

/// Runs an external program with inherited stdio.
pub trait CommandRunner {
    /// Returns whether the program exited successfully.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<bool>;
}

/// [`CommandRunner`] spawning real processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<bool> {
        log::debug!("Running '{} {}' in {}", program, args.join(" "), cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::Other(anyhow::anyhow!("Failed to spawn '{program}': {e}")))?;

        Ok(status.success())
    }
}

pub struct Finalizer<'a> {
    tree: &'a WorkingTree,
    runner: &'a dyn CommandRunner,
    dry_run: bool,
}

impl<'a> Finalizer<'a> {
    pub fn new(tree: &'a WorkingTree, runner: &'a dyn CommandRunner, dry_run: bool) -> Self {
        Self { tree, runner, dry_run }
    }

    /// Runs `composer install` in the working tree. Failures are logged and
    /// never stop the run.
    pub fn install_dependencies(&self) -> bool {
        let command = format!("{} {}", composer::PROGRAM, composer::INSTALL_ARGS.join(" "));
        if self.dry_run {
            log::info!("[DRY RUN] Running '{command}'");
            return false;
        }

        log::info!("Running '{command}'");
        match self.runner.run(composer::PROGRAM, composer::INSTALL_ARGS, self.tree.root()) {
            Ok(true) => true,
            Ok(false) => {
                log::warn!("'{command}' did not finish successfully");
                false
            }
            Err(e) => {
                log::warn!("Failed to run '{command}': {e}");
                false
            }
        }
    }

    /// The running tool, when it exists inside the working tree. Anything
    /// else, such as an installed binary, is never offered for deletion.
    pub fn deletable_script(&self) -> Option<&Path> {
        let Some(script) = self.tree.script() else {
            log::warn!("Path of the running script is unknown, nothing to delete");
            return None;
        };
        if self.tree.script_relative().is_none() {
            log::warn!(
                "Script '{}' lies outside '{}', not deleting it",
                script.display(),
                self.tree.root().display()
            );
            return None;
        }
        if !script.exists() {
            log::warn!("Script '{}' no longer exists", script.display());
            return None;
        }
        Some(script)
    }

    /// Deletes the running tool. Returns whether a file was removed.
    pub fn delete_script(&self) -> Result<bool> {
        let Some(script) = self.deletable_script() else {
            return Ok(false);
        };

        if self.dry_run {
            log::info!("[DRY RUN] Deleting '{}'", script.display());
            return Ok(false);
        }

        log::info!("Deleting '{}'", script.display());
        remove_file(script)?;
        Ok(true)
    }
}
