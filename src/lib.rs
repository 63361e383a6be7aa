// git-plan - plan your commits before you write the code
// Commit messages are authored up front, kept inside the repository, and
// turned into real commits once the work is done.

pub mod app;
pub mod cli;
pub mod models;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use app::App;
pub use models::{Commit, CommitError, CommitMessage, PlanConfig, Project};
pub use services::{Editor, EditorError, PlanService, ProjectService};
