//! Plan service - create, edit and delete planned commits

use super::editor::Editor;
use super::template;
use crate::models::{Commit, CommitMessage, PlanConfig, Project};
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Manages the user's plans for a project
pub struct PlanService {
    commit_template_file: PathBuf,
    edit_template_file: PathBuf,
    editor: Editor,
}

impl PlanService {
    pub fn new(
        commit_template_file: impl Into<PathBuf>,
        edit_template_file: impl Into<PathBuf>,
        editor: Editor,
    ) -> Self {
        Self {
            commit_template_file: commit_template_file.into(),
            edit_template_file: edit_template_file.into(),
            editor,
        }
    }

    /// Build from user config; template paths are relative to `plan_home`
    pub fn from_config(plan_home: &Path, config: &PlanConfig, editor: Editor) -> Self {
        Self::new(
            plan_home.join(&config.commit_template_file),
            plan_home.join(&config.edit_template_file),
            editor,
        )
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Author a new plan in the editor and store it
    ///
    /// Nothing is written when the editor is aborted or the buffer is empty.
    pub fn create_commit<'p>(&self, project: &'p Project) -> Result<Commit<'p>> {
        let initial = template::render(&self.commit_template_file, &CommitMessage::default());
        let message = self.editor.capture_message(&initial)?;

        let commit = Commit::new(project, Commit::next_id(project), message);
        commit
            .save()
            .with_context(|| format!("Failed to save plan {}", commit.id()))?;

        tracing::info!(id = %commit.id(), "created plan");
        Ok(commit)
    }

    /// Revise an existing plan, keeping its id
    ///
    /// The editor is seeded with the plan's current text. When the edit
    /// template is unavailable the stored message itself is used as the seed.
    pub fn edit_commit(&self, commit: &mut Commit<'_>) -> Result<()> {
        let mut initial = template::render(&self.edit_template_file, &commit.message);
        if initial.is_empty() {
            initial = commit.message.to_canonical();
        }

        let message = self.editor.capture_message(&initial)?;
        let updated = Commit::new(commit.project(), commit.id(), message);
        updated
            .save()
            .with_context(|| format!("Failed to save plan {}", commit.id()))?;

        commit.message = updated.message;
        tracing::info!(id = %commit.id(), "edited plan");
        Ok(())
    }

    /// Remove a plan; deleting a plan that is already gone succeeds
    pub fn delete_commit(&self, commit: &Commit<'_>) -> Result<()> {
        commit
            .delete()
            .with_context(|| format!("Failed to delete plan {}", commit.id()))?;

        tracing::info!(id = %commit.id(), "deleted plan");
        Ok(())
    }

    pub fn has_commits(project: &Project) -> bool {
        project.has_commits()
    }

    /// All stored plans for the project, oldest first
    pub fn get_commits(project: &Project) -> Result<Vec<Commit<'_>>> {
        let commits = Commit::fetch_commits(project).context("Failed to read plans")?;
        Ok(commits)
    }
}
