//! Commit SHA lookup
//!
//! Finds the repository containing a directory (searching upward through
//! its parents) and resolves the commit HEAD points to, using git2-rs.
//!
//! ```no_run
//! use provenance::git::git_sha;
//!
//! match git_sha() {
//!     Some(sha) => println!("built from {}", sha),
//!     None => println!("built from an unknown commit"),
//! }
//! ```

use crate::config::RepoSearch;
use crate::reporter::{ErrorReporter, TracingReporter};
use git2::{ErrorCode, Repository, RepositoryOpenFlags};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GitShaError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository not found from path: {0}")]
    RepositoryNotFound(String),

    #[error("No HEAD commit found")]
    NoHeadCommit,
}

pub type GitShaResult<T> = Result<T, GitShaError>;

/// Full hex id of the commit HEAD resolves to.
pub fn read_head_sha(search: &RepoSearch) -> GitShaResult<String> {
    let repo = Repository::open_ext(
        &search.start_dir,
        RepositoryOpenFlags::empty(),
        search.ceiling_dirs.iter(),
    )
    .map_err(|e| match e.code() {
        ErrorCode::NotFound => {
            GitShaError::RepositoryNotFound(search.start_dir.display().to_string())
        }
        _ => GitShaError::Git(e),
    })?;

    let head = repo.head().map_err(|e| match e.code() {
        ErrorCode::UnbornBranch | ErrorCode::NotFound => GitShaError::NoHeadCommit,
        _ => GitShaError::Git(e),
    })?;
    let commit = head.peel_to_commit()?;
    let sha = commit.id().to_string();

    debug!(sha = %sha, repo = %repo.path().display(), "Resolved HEAD commit");
    Ok(sha)
}

/// Like [`read_head_sha`], but failures go to `reporter` and yield `None`.
pub fn git_sha_with(search: &RepoSearch, reporter: &dyn ErrorReporter) -> Option<String> {
    match read_head_sha(search) {
        Ok(sha) => Some(sha),
        Err(e) => {
            reporter.report_error("Unable to get git commit sha", &e);
            None
        }
    }
}

/// HEAD commit of the repository containing the current directory.
pub fn git_sha() -> Option<String> {
    git_sha_with(&RepoSearch::default(), &TracingReporter)
}
