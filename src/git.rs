//! Git repository detection

use git2::Repository;
use std::path::Path;

/// Check if a path is inside a git repository
#[must_use]
pub fn is_git_repository(path: &Path) -> bool {
    Repository::discover(path).is_ok()
}
