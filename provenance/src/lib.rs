//! Build provenance helpers
//!
//! Looks up the commit a build came from, persists it to a version file,
//! reads it back, and reads boolean flags from the environment.

pub mod config;
pub mod env;
pub mod git;
pub mod reporter;
pub mod version_file;

pub use config::{RepoSearch, VersionConfig};
pub use env::{bool_env, parse_bool, FlagDefault};
pub use git::{git_sha, git_sha_with, read_head_sha, GitShaError, GitShaResult};
pub use reporter::{ErrorReporter, RecordingReporter, ReportedError, TracingReporter};
pub use version_file::{
    read_git_sha, write_app_version, write_version, VersionFileError, VersionFileResult,
};
