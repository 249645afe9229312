use std::path::Path;

use git2::{Repository, StatusOptions};

use crate::domain::GitInfo;

/// Snapshot the enclosing git repository, if any.
///
/// Outside a repository (or on any git failure) the snapshot is empty:
/// git metadata is contextual garnish, never a reason to fail a run.
pub fn snapshot(cwd: &Path) -> GitInfo {
    let Ok(repo) = Repository::discover(cwd) else {
        return GitInfo::default();
    };

    let root = repo
        .workdir()
        .map(|path| path.display().to_string())
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string();

    let (branch, commit) = match repo.head() {
        Ok(head) => (
            head.shorthand().unwrap_or_default().to_string(),
            head.target().map(|oid| oid.to_string()).unwrap_or_default(),
        ),
        Err(_) => (String::new(), String::new()),
    };

    let dirty = repo
        .statuses(Some(StatusOptions::new().include_untracked(true)))
        .map(|statuses| !statuses.is_empty())
        .unwrap_or(false);

    GitInfo { root, branch, commit, dirty }
}
