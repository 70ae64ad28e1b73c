use std::process::{Command, Stdio};

use super::interface::AuthStatus;
use crate::constants::github::{CLI_PROGRAM, HOST};

/// [`AuthStatus`] read from `gh auth status`.
#[derive(Debug)]
pub struct GhCli {
    program: String,
}

impl GhCli {
    pub fn new() -> Self {
        Self::with_program(CLI_PROGRAM)
    }

    /// Runs another executable in place of `gh`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStatus for GhCli {
    fn status_output(&self) -> Option<String> {
        let program = &self.program;
        log::debug!("Running '{program} auth status -h {HOST}'");

        let output = Command::new(program)
            .args(["auth", "status", "-h", HOST])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| log::debug!("Failed to run {program}: {e}"))
            .ok()?;

        // gh reports on stderr in older releases and on stdout in newer ones.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Some(text)
    }
}
