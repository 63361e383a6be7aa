//! Editor round-trip: hand a scratch file to the user's editor and read it back

use crate::models::config::DEFAULT_EDITOR;
use crate::models::{CommitError, CommitMessage};
use std::io::{self, Write};
use std::process::{Command, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Exit status used when the user interrupts git-plan
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static EDITING: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static INSTALL_HANDLER: Once = Once::new();

/// Errors that can occur during an editor round-trip
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Failed to launch editor '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Editor '{program}' exited with {}", describe_exit(.code))]
    Aborted { program: String, code: Option<i32> },

    #[error("Interrupted while editing")]
    Interrupted,

    #[error("Failed to prepare editor buffer: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Message(#[from] CommitError),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Route Ctrl-C through a handler so it cannot skip the scratch file cleanup
///
/// While an editor session is open the signal is only recorded and the session
/// ends with `EditorError::Interrupted` once the editor exits. Outside a
/// session the process exits right away.
fn install_interrupt_handler() {
    INSTALL_HANDLER.call_once(|| {
        let result = ctrlc::set_handler(|| {
            if EDITING.load(Ordering::SeqCst) {
                INTERRUPTED.store(true, Ordering::SeqCst);
            } else {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        });
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        }
    });
}

/// Marks an editor session as open until dropped
struct EditSession;

impl EditSession {
    fn begin() -> Self {
        install_interrupt_handler();
        INTERRUPTED.store(false, Ordering::SeqCst);
        EDITING.store(true, Ordering::SeqCst);
        Self
    }

    fn interrupted(&self) -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

impl Drop for EditSession {
    fn drop(&mut self) {
        EDITING.store(false, Ordering::SeqCst);
    }
}

/// The interactive editor plans are written in
///
/// Built once from configuration. The command may carry leading arguments
/// (`code --wait`); the scratch file path is appended last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: String,
    args: Vec<String>,
}

impl Editor {
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Self {
            program,
            args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Open `initial` in the editor and return the buffer as saved
    ///
    /// Blocks until the editor exits. The scratch file is removed on every
    /// path out of this function, Ctrl-C included. A non-zero exit is treated
    /// as the user backing out.
    pub fn edit(&self, initial: &str) -> Result<String, EditorError> {
        // Declared before the scratch file so it is dropped after it
        let session = EditSession::begin();

        let mut scratch = tempfile::Builder::new()
            .prefix("git-plan-")
            .suffix(".tmp")
            .tempfile()?;
        scratch.write_all(initial.as_bytes())?;
        scratch.flush()?;
        scratch.as_file().sync_all()?;

        tracing::debug!(
            editor = %self.program,
            path = %scratch.path().display(),
            "waiting for editor"
        );

        let status = self.run(scratch.path())?;
        if session.interrupted() {
            return Err(EditorError::Interrupted);
        }
        if !status.success() {
            return Err(EditorError::Aborted {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        // Re-open by path: editors often save by replacing the file
        let edited = std::fs::read_to_string(scratch.path())?;
        Ok(edited)
    }

    /// Run a full round-trip and parse the result into a message
    ///
    /// A buffer left without any text is rejected as an empty plan.
    pub fn capture_message(&self, initial: &str) -> Result<CommitMessage, EditorError> {
        let edited = self.edit(initial)?;
        let message = CommitMessage::parse(&edited)?;
        if message.is_empty() {
            return Err(CommitError::EmptyMessage.into());
        }
        Ok(message)
    }

    fn run(&self, path: &std::path::Path) -> Result<ExitStatus, EditorError> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Launch {
                program: self.program.clone(),
                source,
            })
    }
}
