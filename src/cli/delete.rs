use super::ensure_ready;
use crate::app::App;
use crate::services::PlanService;
use crate::Result;
use colored::Colorize;

/// Pick a plan and throw it away
pub fn run(app: &App, yes: bool) -> Result<()> {
    if !ensure_ready(app) {
        return Ok(());
    }

    let commits = PlanService::get_commits(&app.project)?;
    if commits.is_empty() {
        app.ui.bold("No plans to delete.");
        return Ok(());
    }

    let Some(chosen) = app
        .ui
        .choose_commit(&commits, "Which plan do you want to delete?")?
    else {
        return Ok(());
    };

    if !yes {
        let prompt = format!("Delete '{}'?", chosen.message.headline);
        if !app.ui.confirm(&prompt)? {
            println!("Kept.");
            return Ok(());
        }
    }

    app.plan_service.delete_commit(chosen)?;
    println!(
        "{}",
        format!("🗑  Deleted: {}", chosen.message.headline).green()
    );
    Ok(())
}
