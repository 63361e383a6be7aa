pub mod commit;
pub mod config;
pub mod message;
pub mod project;

pub use commit::{Commit, CommitError, CommitResult};
pub use config::{plan_home, ConfigError, PlanConfig};
pub use message::CommitMessage;
pub use project::Project;
