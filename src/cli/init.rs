use crate::app::App;
use crate::Result;
use colored::Colorize;

/// Initialize git plan in the current repository
pub fn run(app: &App) -> Result<()> {
    if !app.project.is_repository() {
        app.ui.bold("Not in a git repository.");
        return Ok(());
    }

    if app.project.is_initialized() {
        app.ui.bold("Git plan is already initialized.");
        return Ok(());
    }

    app.project_service.initialize(&app.project)?;
    println!("{}", "✅ Initialized git plan.".green().bold());
    println!("   Plans are stored in {}", app.project.commits_dir().display());

    Ok(())
}
