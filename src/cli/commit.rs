use super::ensure_ready;
use crate::app::App;
use crate::services::PlanService;
use crate::Result;
use colored::Colorize;

/// Pick a plan and commit the staged changes with its message
///
/// The plan is removed once git accepts the commit, unless `keep` is set.
pub fn run(app: &App, keep: bool) -> Result<()> {
    if !ensure_ready(app) {
        return Ok(());
    }

    let commits = PlanService::get_commits(&app.project)?;
    if commits.is_empty() {
        app.ui.bold("No plans to commit.");
        return Ok(());
    }

    let Some(chosen) = app
        .ui
        .choose_commit(&commits, "Which plan do you want to commit?")?
    else {
        return Ok(());
    };

    app.git_service.commit(&app.project, &chosen.message)?;

    if !keep {
        app.plan_service.delete_commit(chosen)?;
    }
    println!(
        "{}",
        format!("✅ Committed: {}", chosen.message.headline).green()
    );
    Ok(())
}
