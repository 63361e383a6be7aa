use super::{ensure_ready, report_editor_outcome};
use crate::app::App;
use crate::Result;
use colored::Colorize;

/// Author a new plan in the editor
pub fn run(app: &App) -> Result<()> {
    if !ensure_ready(app) {
        return Ok(());
    }

    match app.plan_service.create_commit(&app.project) {
        Ok(commit) => {
            println!(
                "{}",
                format!("📝 Planned: {}", commit.message.headline).green()
            );
            Ok(())
        }
        Err(e) => report_editor_outcome(e),
    }
}
