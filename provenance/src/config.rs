use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the version file location.
pub const VERSION_FILE_ENV: &str = "APP_VERSION_FILE";
/// Environment variable overriding the repository search start directory.
pub const REPO_PATH_ENV: &str = "APP_VERSION_REPO";

pub const DEFAULT_VERSION_FILE: &str = "app_version";

/// Where to start looking for a repository, and where to stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSearch {
    pub start_dir: PathBuf,
    /// Directories the upward search never enters.
    pub ceiling_dirs: Vec<PathBuf>,
}

impl Default for RepoSearch {
    fn default() -> Self {
        Self {
            start_dir: PathBuf::from("."),
            ceiling_dirs: vec![],
        }
    }
}

impl RepoSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_dir(mut self, start_dir: impl Into<PathBuf>) -> Self {
        self.start_dir = start_dir.into();
        self
    }

    pub fn with_ceiling_dir(mut self, ceiling_dir: impl Into<PathBuf>) -> Self {
        self.ceiling_dirs.push(ceiling_dir.into());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.start_dir.as_os_str().is_empty() {
            return Err("Start directory cannot be empty".to_string());
        }

        if self.ceiling_dirs.iter().any(|d| d.as_os_str().is_empty()) {
            return Err("Ceiling directories cannot be empty".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    pub version_file: PathBuf,
    pub search: RepoSearch,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            search: RepoSearch::default(),
        }
    }
}

impl VersionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `APP_VERSION_FILE` and `APP_VERSION_REPO`.
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(file) = env::var_os(VERSION_FILE_ENV).filter(|v| !v.is_empty()) {
            config.version_file = PathBuf::from(file);
        }

        if let Some(repo) = env::var_os(REPO_PATH_ENV).filter(|v| !v.is_empty()) {
            config.search.start_dir = PathBuf::from(repo);
        }

        config
    }

    pub fn with_version_file(mut self, version_file: impl Into<PathBuf>) -> Self {
        self.version_file = version_file.into();
        self
    }

    pub fn with_search(mut self, search: RepoSearch) -> Self {
        self.search = search;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.version_file.as_os_str().is_empty() {
            return Err("Version file path cannot be empty".to_string());
        }

        self.search.validate()
    }
}
