//! Commit template loading and placeholder substitution

use crate::models::CommitMessage;
use std::path::Path;

/// Placeholder replaced with the plan headline
pub const HEADLINE_TOKEN: &str = "%headline%";

/// Placeholder replaced with the plan body
pub const BODY_TOKEN: &str = "%body%";

/// Default template for new plans, installed by `init`
pub const DEFAULT_COMMIT_TEMPLATE: &str = include_str!("../../templates/commit_template.txt");

/// Default template for editing plans, installed by `init`
pub const DEFAULT_EDIT_TEMPLATE: &str = include_str!("../../templates/edit_template.txt");

/// Read a template file
///
/// A missing or unreadable template is not fatal: the problem is logged and an
/// empty template is returned, so planning continues without boilerplate.
pub fn load_template(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "commit template unavailable, starting from an empty buffer"
            );
            String::new()
        }
    }
}

/// Replace the headline and body placeholders in `template`
pub fn substitute(template: &str, headline: &str, body: &str) -> String {
    template
        .replace(HEADLINE_TOKEN, headline)
        .replace(BODY_TOKEN, body)
}

/// Load the template at `path` and fill it from `message`
pub fn render(path: &Path, message: &CommitMessage) -> String {
    substitute(&load_template(path), &message.headline, &message.body)
}
