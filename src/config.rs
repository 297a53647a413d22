use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

/// Where the contact book lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}
