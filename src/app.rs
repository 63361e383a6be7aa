//! Process-wide wiring: every service is built here once and passed down

use crate::models::{plan_home, PlanConfig, Project};
use crate::services::{Editor, GitService, PlanService, ProjectService, UiService};
use crate::Result;
use anyhow::Context;
use std::path::Path;

pub struct App {
    pub project: Project,
    pub plan_service: PlanService,
    pub project_service: ProjectService,
    pub git_service: GitService,
    pub ui: UiService,
}

impl App {
    /// Assemble the application from explicit inputs
    ///
    /// `editor_env` is the value of `$EDITOR`, if any; the config's editor
    /// wins over it.
    pub fn new(
        working_dir: &Path,
        plan_home: &Path,
        config: &PlanConfig,
        editor_env: Option<String>,
    ) -> Self {
        let editor = Editor::new(&config.resolve_editor(editor_env));
        tracing::debug!(editor = %editor.program(), home = %plan_home.display(), "assembling app");

        Self {
            project: Project::from_working_dir(working_dir),
            plan_service: PlanService::from_config(plan_home, config, editor),
            project_service: ProjectService::from_config(plan_home, config),
            git_service: GitService::new(),
            ui: UiService::new(),
        }
    }

    /// Assemble from the current directory, the user's plan home and `$EDITOR`
    pub fn from_env() -> Result<Self> {
        let working_dir = std::env::current_dir().context("Failed to read current directory")?;
        let plan_home = plan_home()?;
        let config = PlanConfig::load(&plan_home)?;
        let editor_env = std::env::var("EDITOR").ok();

        Ok(Self::new(&working_dir, &plan_home, &config, editor_env))
    }
}
