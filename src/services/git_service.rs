//! Git service - turns a finished plan into a real commit

use crate::models::{CommitMessage, Project};
use crate::Result;
use anyhow::Context;
use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Default)]
pub struct GitService {}

impl GitService {
    pub fn new() -> Self {
        Self {}
    }

    /// Run `git commit` in the project with `message`, reading it from stdin
    ///
    /// Git's own output goes straight to the terminal so hook output and
    /// "nothing to commit" notices reach the user.
    pub fn commit(&self, project: &Project, message: &CommitMessage) -> Result<()> {
        let mut command = Command::new("git");
        command
            .args(["commit", "-F", "-"])
            .current_dir(project.root_dir());

        run_with_input(command, message.to_canonical().as_bytes())
            .context("git commit failed")
    }
}

/// Spawn `command`, feed `input` on its stdin and wait for it to finish
///
/// The child is always reaped, even when writing to it fails. A non-zero exit
/// is reported ahead of the write error, since a child that quits early is
/// usually why the pipe broke.
fn run_with_input(mut command: Command, input: &[u8]) -> Result<()> {
    let program = command.get_program().to_string_lossy().to_string();
    let mut child = command.stdin(Stdio::piped()).spawn().with_context(|| {
        format!(
            "Command '{}' not found. Please ensure it is installed and in your PATH.",
            program
        )
    })?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input),
        None => Ok(()),
    };

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;
    if !status.success() {
        match status.code() {
            Some(code) => anyhow::bail!("{} exited with status {}", program, code),
            None => anyhow::bail!("{} was terminated by a signal", program),
        }
    }

    written.with_context(|| format!("Failed to write input to {}", program))?;
    Ok(())
}
