//! UI service - rendering and picking plans in the terminal

use crate::models::Commit;
use crate::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Default)]
pub struct UiService {}

impl UiService {
    pub fn new() -> Self {
        Self {}
    }

    /// Print a one-line status message
    pub fn bold(&self, message: &str) {
        println!("{}", message.bold());
    }

    /// Render plans for `list`, oldest first
    pub fn render_commits(&self, commits: &[Commit<'_>], headline_only: bool) -> String {
        let mut output = String::new();

        for commit in commits {
            let created = commit
                .created_at()
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();

            output.push_str(&format!(
                "{} {} {}\n",
                commit.id().yellow(),
                created.dimmed(),
                commit.message.headline.bold()
            ));

            if !headline_only && !commit.message.body.is_empty() {
                for line in commit.message.body.lines() {
                    output.push_str(&format!("    {}\n", line));
                }
                output.push('\n');
            }
        }

        output
    }

    /// Ask the user to pick one plan; `None` when they back out
    pub fn choose_commit<'a, 'p>(
        &self,
        commits: &'a [Commit<'p>],
        prompt: &str,
    ) -> Result<Option<&'a Commit<'p>>> {
        let items: Vec<&str> = commits
            .iter()
            .map(|commit| commit.message.headline.as_str())
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|index| &commits[index]))
    }

    /// Yes/no question, defaulting to no
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
