use std::path::{Path, PathBuf};

/// Name of the plan directory inside the repository's control directory
const PLAN_DIR: &str = "plan";

/// Name of the plan-storage directory inside the plan directory
const COMMITS_DIR: &str = "commits";

/// One working tree that plans are authored against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root_dir: PathBuf,
    git_dir: Option<PathBuf>,
}

impl Project {
    /// Resolve the project enclosing `working_dir`
    ///
    /// Walks up to the nearest git repository. Outside of a repository the
    /// working directory itself becomes the root and `is_repository()` is false.
    pub fn from_working_dir(working_dir: impl AsRef<Path>) -> Self {
        let working_dir = working_dir.as_ref();

        match git2::Repository::discover(working_dir) {
            Ok(repo) => {
                let git_dir = repo.path().to_path_buf();
                let root_dir = repo
                    .workdir()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| working_dir.to_path_buf());
                Self {
                    root_dir,
                    git_dir: Some(git_dir),
                }
            }
            Err(e) => {
                tracing::debug!(
                    path = %working_dir.display(),
                    error = %e,
                    "no git repository found"
                );
                Self {
                    root_dir: working_dir.to_path_buf(),
                    git_dir: None,
                }
            }
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn is_repository(&self) -> bool {
        self.git_dir.is_some()
    }

    /// Directory holding everything git-plan keeps for this repository
    pub fn plan_dir(&self) -> PathBuf {
        self.git_dir
            .clone()
            .unwrap_or_else(|| self.root_dir.join(".git"))
            .join(PLAN_DIR)
    }

    /// Plan-storage directory: one file per planned commit
    pub fn commits_dir(&self) -> PathBuf {
        self.plan_dir().join(COMMITS_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.is_repository() && self.commits_dir().is_dir()
    }

    pub fn has_commits(&self) -> bool {
        let Ok(entries) = std::fs::read_dir(self.commits_dir()) else {
            return false;
        };

        entries
            .filter_map(|entry| entry.ok())
            .any(|entry| is_plan_entry(&entry))
    }
}

/// Whether a directory entry is a stored plan rather than a directory or a
/// hidden in-flight write
pub(crate) fn is_plan_entry(entry: &std::fs::DirEntry) -> bool {
    let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
    let hidden = entry.file_name().to_string_lossy().starts_with('.');
    is_file && !hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        let project = Project::from_working_dir(temp_dir.path());

        assert!(!project.is_repository());
        assert!(!project.is_initialized());
        assert!(!project.has_commits());
        assert_eq!(project.root_dir(), temp_dir.path());
    }

    #[test]
    fn test_inside_repository() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();

        let nested = temp_dir.path().join("src/deep");
        std::fs::create_dir_all(&nested).unwrap();

        let project = Project::from_working_dir(&nested);
        assert!(project.is_repository());
        assert!(!project.is_initialized());
        assert!(project.commits_dir().ends_with(".git/plan/commits"));
        assert_eq!(
            project.root_dir().canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_initialized_and_has_commits() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();
        let project = Project::from_working_dir(temp_dir.path());

        std::fs::create_dir_all(project.commits_dir()).unwrap();
        assert!(project.is_initialized());
        assert!(!project.has_commits());

        std::fs::write(project.commits_dir().join(".tmpXYZ"), "partial").unwrap();
        assert!(!project.has_commits());

        std::fs::write(project.commits_dir().join("1700000000"), "A\n\nB").unwrap();
        assert!(project.has_commits());
    }
}
