use super::{ensure_ready, report_editor_outcome};
use crate::app::App;
use crate::services::PlanService;
use crate::Result;
use colored::Colorize;

/// Pick an existing plan and revise it in the editor
pub fn run(app: &App) -> Result<()> {
    if !ensure_ready(app) {
        return Ok(());
    }

    let commits = PlanService::get_commits(&app.project)?;
    if commits.is_empty() {
        app.ui.bold("No plans to edit.");
        return Ok(());
    }

    let Some(chosen) = app
        .ui
        .choose_commit(&commits, "Which plan do you want to edit?")?
    else {
        return Ok(());
    };

    let mut commit = chosen.clone();
    match app.plan_service.edit_commit(&mut commit) {
        Ok(()) => {
            println!(
                "{}",
                format!("📝 Updated: {}", commit.message.headline).green()
            );
            Ok(())
        }
        Err(e) => report_editor_outcome(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanConfig;
    use tempfile::TempDir;

    #[test]
    fn test_edit_without_plans() {
        let work = TempDir::new().unwrap();
        git2::Repository::init(work.path()).unwrap();
        let home = TempDir::new().unwrap();
        let app = App::new(work.path(), home.path(), &PlanConfig::default(), None);
        crate::cli::init::run(&app).unwrap();

        run(&app).unwrap();
    }
}
