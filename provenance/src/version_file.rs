//! Version file persistence
//!
//! A version file holds a single commit id, optionally followed by trailing
//! whitespace. Unlike the commit lookup, every operation here propagates its
//! errors.

use crate::config::RepoSearch;
use crate::git::git_sha_with;
use crate::reporter::ErrorReporter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum VersionFileError {
    #[error("Failed to read version file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write version file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Commit sha unavailable, refusing to write {0}")]
    CommitUnavailable(PathBuf),
}

pub type VersionFileResult<T> = Result<T, VersionFileError>;

/// Create or truncate `path` and write `sha` to it, newline terminated.
pub fn write_version(path: impl AsRef<Path>, sha: &str) -> VersionFileResult<()> {
    let path = path.as_ref();
    fs::write(path, format!("{}\n", sha)).map_err(|source| VersionFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), sha, "Wrote version file");
    Ok(())
}

/// Write the current HEAD commit to `path`.
///
/// Fails with [`VersionFileError::CommitUnavailable`] when no commit can be
/// resolved; the lookup failure itself goes to `reporter` and the file is
/// left untouched.
pub fn write_app_version(
    path: impl AsRef<Path>,
    search: &RepoSearch,
    reporter: &dyn ErrorReporter,
) -> VersionFileResult<String> {
    let path = path.as_ref();
    let sha = git_sha_with(search, reporter)
        .ok_or_else(|| VersionFileError::CommitUnavailable(path.to_path_buf()))?;
    write_version(path, &sha)?;
    Ok(sha)
}

/// Read the commit id stored in `path`.
///
/// Returns `None` for a file that is empty once trailing whitespace is
/// stripped. A missing or unreadable file is an error.
pub fn read_git_sha(path: impl AsRef<Path>) -> VersionFileResult<Option<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| VersionFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let sha = contents.trim_end();
    if sha.is_empty() {
        return Ok(None);
    }
    Ok(Some(sha.to_string()))
}
