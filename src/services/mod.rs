//! Service layer for git-plan
//!
//! Services hold the business logic behind the CLI commands. They are built
//! once at startup from configuration and handed to the commands.

pub mod editor;
pub mod git_service;
pub mod plan_service;
pub mod project_service;
pub mod template;
pub mod ui_service;

// Re-export commonly used types
pub use editor::{Editor, EditorError};
pub use git_service::GitService;
pub use plan_service::PlanService;
pub use project_service::ProjectService;
pub use ui_service::UiService;
