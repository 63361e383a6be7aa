pub mod commit;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod plan;

use crate::app::App;
use crate::models::CommitError;
use crate::services::EditorError;
use crate::Result;
use colored::Colorize;

/// Check that the project can hold plans, telling the user why not
pub(crate) fn ensure_ready(app: &App) -> bool {
    if !app.project.is_repository() {
        app.ui.bold("Not in a git repository.");
        return false;
    }
    if !app.project.is_initialized() {
        app.ui.bold("Git plan is not initialized. Run 'git plan init' first.");
        return false;
    }
    true
}

/// Turn the expected ways out of an editor session into messages
///
/// Backing out of the editor and saving an empty buffer both leave storage
/// untouched; anything else is a real failure and is passed on.
pub(crate) fn report_editor_outcome(err: anyhow::Error) -> Result<()> {
    match err.downcast_ref::<EditorError>() {
        Some(EditorError::Aborted { .. }) => {
            println!("{}", format!("{}. Nothing saved.", err).yellow());
            Ok(())
        }
        Some(EditorError::Message(CommitError::EmptyMessage)) => {
            println!("{}", "Empty plan. Nothing saved.".yellow());
            Ok(())
        }
        _ => Err(err),
    }
}
