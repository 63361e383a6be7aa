use super::message::CommitMessage;
use super::project::{is_plan_entry, Project};
use chrono::{DateTime, Local, TimeZone};
use std::cmp::Ordering;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result type for plan storage operations
pub type CommitResult<T> = Result<T, CommitError>;

/// Errors that can occur when working with planned commits
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("Plan is empty: write a headline on the first line")]
    EmptyMessage,

    #[error("Failed to access plan file {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to persist plan file {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CommitError {
    fn storage(path: &Path, source: io::Error) -> Self {
        Self::Storage {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A planned commit, stored as one file in the project's plan-storage directory
#[derive(Debug, Clone)]
pub struct Commit<'p> {
    project: &'p Project,
    id: String,
    pub message: CommitMessage,
}

impl<'p> Commit<'p> {
    pub fn new(project: &'p Project, id: impl Into<String>, message: CommitMessage) -> Self {
        Self {
            project,
            id: id.into(),
            message,
        }
    }

    /// Mint an id for a new plan
    ///
    /// Ids are unix seconds. When a plan with that id already exists the id is
    /// bumped until it names a free file, so two plans created in the same
    /// second never overwrite each other.
    pub fn next_id(project: &Project) -> String {
        let mut id = chrono::Utc::now().timestamp();
        let dir = project.commits_dir();

        while dir.join(id.to_string()).exists() {
            tracing::debug!(id, "plan id already taken, bumping");
            id += 1;
        }

        id.to_string()
    }

    /// Load one plan by id
    pub fn load(project: &'p Project, id: &str) -> CommitResult<Self> {
        let path = project.commits_dir().join(id);
        let content = fs::read_to_string(&path).map_err(|e| CommitError::storage(&path, e))?;
        let message = CommitMessage::parse(&content)?;

        Ok(Self::new(project, id, message))
    }

    /// Load every plan stored for the project, oldest first
    ///
    /// A project without a plan-storage directory has no plans. Files that
    /// cannot be read as a plan are logged and skipped.
    pub fn fetch_commits(project: &'p Project) -> CommitResult<Vec<Self>> {
        let dir = project.commits_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CommitError::storage(&dir, e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CommitError::storage(&dir, e))?;
            if !is_plan_entry(&entry) {
                continue;
            }
            ids.push(entry.file_name().to_string_lossy().to_string());
        }
        ids.sort_by(|a, b| compare_ids(a, b));

        let mut commits = Vec::with_capacity(ids.len());
        for id in &ids {
            match Self::load(project, id) {
                Ok(commit) => commits.push(commit),
                Err(e) => tracing::warn!(id = %id, error = %e, "skipping unreadable plan"),
            }
        }
        Ok(commits)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn project(&self) -> &'p Project {
        self.project
    }

    /// Location of this plan's file
    pub fn path(&self) -> PathBuf {
        self.project.commits_dir().join(&self.id)
    }

    /// When the plan was created, for ids minted by `next_id`
    pub fn created_at(&self) -> Option<DateTime<Local>> {
        let secs = self.id.parse::<i64>().ok()?;
        Local.timestamp_opt(secs, 0).single()
    }

    /// Write the plan to storage, replacing any previous version
    ///
    /// The content goes to a temp file in the same directory first and is then
    /// renamed over the target, so readers never see a half-written plan.
    pub fn save(&self) -> CommitResult<()> {
        let dir = self.project.commits_dir();
        let path = self.path();

        fs::create_dir_all(&dir).map_err(|e| CommitError::storage(&dir, e))?;

        let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| CommitError::storage(&dir, e))?;
        if let Err(e) = temp_file.write_all(self.message.to_canonical().as_bytes()) {
            return Err(CommitError::storage(temp_file.path(), e));
        }
        if let Err(e) = temp_file.flush() {
            return Err(CommitError::storage(temp_file.path(), e));
        }

        temp_file.persist(&path).map_err(|e| CommitError::Persist {
            path: path.clone(),
            source: e.error,
        })?;

        tracing::debug!(id = %self.id, path = %path.display(), "saved plan");
        Ok(())
    }

    /// Remove the plan from storage; removing an already removed plan is a no-op
    pub fn delete(&self) -> CommitResult<()> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(id = %self.id, "deleted plan");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CommitError::storage(&path, e)),
        }
    }
}

/// Order plan ids chronologically
///
/// Decimal ids compare by value, with the name breaking ties between
/// zero-padded spellings. Anything else sorts after them by name.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_project() -> (TempDir, Project) {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();
        let project = Project::from_working_dir(temp_dir.path());
        fs::create_dir_all(project.commits_dir()).unwrap();
        (temp_dir, project)
    }

    #[test]
    fn test_save_and_fetch() {
        let (_temp, project) = setup_project();

        let commit = Commit::new(&project, "1700000000", CommitMessage::new("A", "B"));
        commit.save().unwrap();

        let commits = Commit::fetch_commits(&project).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id(), "1700000000");
        assert_eq!(commits[0].message, CommitMessage::new("A", "B"));

        let stored = fs::read_to_string(project.commits_dir().join("1700000000")).unwrap();
        assert_eq!(stored, "A\n\nB");
    }

    #[test]
    fn test_save_overwrites_in_place() {
        let (_temp, project) = setup_project();

        let mut commit = Commit::new(&project, "1700000000", CommitMessage::new("A", "B"));
        commit.save().unwrap();
        commit.message = CommitMessage::new("C", "D");
        commit.save().unwrap();

        let commits = Commit::fetch_commits(&project).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message.headline, "C");
        assert_eq!(fs::read_dir(project.commits_dir()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();
        let project = Project::from_working_dir(temp_dir.path());

        Commit::new(&project, "1", CommitMessage::new("A", "")).save().unwrap();
        assert!(project.commits_dir().join("1").exists());
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let (_temp, project) = setup_project();

        let commit = Commit::new(&project, "1700000000", CommitMessage::new("A", "B"));
        commit.save().unwrap();

        commit.delete().unwrap();
        commit.delete().unwrap();

        assert!(!commit.path().exists());
        assert!(Commit::fetch_commits(&project).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_without_storage_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let project = Project::from_working_dir(temp_dir.path());

        assert!(Commit::fetch_commits(&project).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_orders_chronologically() {
        let (_temp, project) = setup_project();

        for id in ["1700000002", "999999999", "1700000001", "notes"] {
            Commit::new(&project, id, CommitMessage::new(id, "")).save().unwrap();
        }

        let ids: Vec<String> = Commit::fetch_commits(&project)
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["999999999", "1700000001", "1700000002", "notes"]);
    }

    #[test]
    fn test_fetch_skips_hidden_files_and_dirs() {
        let (_temp, project) = setup_project();

        Commit::new(&project, "1", CommitMessage::new("A", "")).save().unwrap();
        fs::write(project.commits_dir().join(".tmp123"), "half").unwrap();
        fs::create_dir(project.commits_dir().join("nested")).unwrap();

        let commits = Commit::fetch_commits(&project).unwrap();
        assert_eq!(commits.len(), 1);
    }

    #[test]
    fn test_next_id_avoids_collision() {
        let (_temp, project) = setup_project();

        let first = Commit::next_id(&project);
        Commit::new(&project, first.clone(), CommitMessage::new("A", "")).save().unwrap();
        let second = Commit::next_id(&project);

        assert_ne!(first, second);
        assert!(second.parse::<i64>().unwrap() > first.parse::<i64>().unwrap());
    }

    #[test]
    fn test_load_empty_file_is_rejected() {
        let (_temp, project) = setup_project();
        fs::write(project.commits_dir().join("42"), "").unwrap();

        assert!(matches!(
            Commit::load(&project, "42"),
            Err(CommitError::EmptyMessage)
        ));
    }

    #[test]
    fn test_created_at() {
        let (_temp, project) = setup_project();

        let commit = Commit::new(&project, "1700000000", CommitMessage::default());
        assert_eq!(commit.created_at().unwrap().timestamp(), 1_700_000_000);

        let named = Commit::new(&project, "notes", CommitMessage::default());
        assert!(named.created_at().is_none());
    }

    #[test]
    fn test_compare_ids() {
        assert_eq!(compare_ids("9", "10"), Ordering::Less);
        assert_eq!(compare_ids("10", "10"), Ordering::Equal);
        assert_eq!(compare_ids("abc", "1"), Ordering::Greater);
        assert_eq!(compare_ids("a", "b"), Ordering::Less);
        assert_eq!(compare_ids("0123", "999"), Ordering::Less);
        assert_eq!(compare_ids("007", "7"), Ordering::Less);
    }

    #[test]
    fn test_fetch_skips_unreadable_plans() {
        let (_temp, project) = setup_project();

        Commit::new(&project, "1700000000", CommitMessage::new("A", "B"))
            .save()
            .unwrap();
        fs::write(project.commits_dir().join("1700000001"), "").unwrap();
        fs::write(project.commits_dir().join("1700000002"), [0xff, 0xfe, 0x00]).unwrap();

        let commits = Commit::fetch_commits(&project).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id(), "1700000000");
    }
}
