//! Project service - one-time setup of plan storage for a repository

use super::template::{DEFAULT_COMMIT_TEMPLATE, DEFAULT_EDIT_TEMPLATE};
use crate::models::{PlanConfig, Project};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ProjectService {
    projects_file: PathBuf,
    commit_template_file: PathBuf,
    edit_template_file: PathBuf,
}

impl ProjectService {
    pub fn new(
        projects_file: impl Into<PathBuf>,
        commit_template_file: impl Into<PathBuf>,
        edit_template_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            projects_file: projects_file.into(),
            commit_template_file: commit_template_file.into(),
            edit_template_file: edit_template_file.into(),
        }
    }

    pub fn from_config(plan_home: &Path, config: &PlanConfig) -> Self {
        Self::new(
            plan_home.join(&config.projects_file),
            plan_home.join(&config.commit_template_file),
            plan_home.join(&config.edit_template_file),
        )
    }

    /// Prepare a repository for planning
    ///
    /// Creates the plan-storage directory, installs the default templates
    /// unless the user already has their own, and records the project in
    /// the registry. Safe to run more than once.
    pub fn initialize(&self, project: &Project) -> Result<()> {
        let commits_dir = project.commits_dir();
        fs::create_dir_all(&commits_dir)
            .with_context(|| format!("Failed to create {}", commits_dir.display()))?;

        install_if_missing(&self.commit_template_file, DEFAULT_COMMIT_TEMPLATE)?;
        install_if_missing(&self.edit_template_file, DEFAULT_EDIT_TEMPLATE)?;

        self.register(project.root_dir())?;

        tracing::info!(root = %project.root_dir().display(), "initialized project");
        Ok(())
    }

    /// Every project root that has been initialized, in registration order
    pub fn known_projects(&self) -> Result<Vec<PathBuf>> {
        if !self.projects_file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.projects_file)
            .with_context(|| format!("Failed to read {}", self.projects_file.display()))?;
        let projects: Vec<PathBuf> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.projects_file.display()))?;
        Ok(projects)
    }

    fn register(&self, root: &Path) -> Result<()> {
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

        let mut projects = self.known_projects()?;
        if projects.contains(&root) {
            return Ok(());
        }
        projects.push(root);

        if let Some(parent) = self.projects_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&projects)?;
        fs::write(&self.projects_file, content)
            .with_context(|| format!("Failed to write {}", self.projects_file.display()))?;
        Ok(())
    }
}

fn install_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "installed default template");
    Ok(())
}
