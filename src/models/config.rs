use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the plan home directory
pub const PLAN_HOME_ENV: &str = "GIT_PLAN_HOME";

/// Editor used when neither the config nor `$EDITOR` names one
pub const DEFAULT_EDITOR: &str = "vim";

const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Cannot find home directory; set GIT_PLAN_HOME")]
    NoHomeDir,
}

/// User-level settings, read from `<plan home>/config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlanConfig {
    /// Editor command, takes precedence over `$EDITOR`
    pub editor: Option<String>,

    /// Template for new plans, relative to plan home
    pub commit_template_file: PathBuf,

    /// Template for editing existing plans, relative to plan home
    pub edit_template_file: PathBuf,

    /// Registry of initialized projects, relative to plan home
    pub projects_file: PathBuf,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            editor: None,
            commit_template_file: PathBuf::from("commit_template.txt"),
            edit_template_file: PathBuf::from("edit_template.txt"),
            projects_file: PathBuf::from("projects.json"),
        }
    }
}

impl PlanConfig {
    /// Load config from `<plan_home>/config.toml`, defaults when missing
    pub fn load(plan_home: &Path) -> Result<Self, ConfigError> {
        let config_path = plan_home.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        let config: PlanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the editor command: config, then `editor_env`, then vim
    ///
    /// A blank value at either level counts as unset.
    pub fn resolve_editor(&self, editor_env: Option<String>) -> String {
        let not_blank = |editor: &String| !editor.trim().is_empty();
        self.editor
            .clone()
            .filter(not_blank)
            .or_else(|| editor_env.filter(not_blank))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }
}

/// Where git-plan keeps its config, templates and project registry
pub fn plan_home() -> Result<PathBuf, ConfigError> {
    if let Ok(home) = std::env::var(PLAN_HOME_ENV) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(".git-plan"))
        .ok_or(ConfigError::NoHomeDir)
}
