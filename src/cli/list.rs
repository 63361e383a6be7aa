use super::ensure_ready;
use crate::app::App;
use crate::services::PlanService;
use crate::Result;
use colored::Colorize;

/// Print every plan in the project
pub fn run(app: &App, oneline: bool) -> Result<()> {
    if !ensure_ready(app) {
        return Ok(());
    }

    let commits = PlanService::get_commits(&app.project)?;
    if commits.is_empty() {
        println!("{}", "No plans yet. Run 'git plan' to create one.".yellow());
        return Ok(());
    }

    print!("{}", app.ui.render_commits(&commits, oneline));
    Ok(())
}
