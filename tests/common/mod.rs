#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding one backing file per test.
pub struct Book {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Book {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.json");
        Ok(Self { _dir: dir, path })
    }

    pub fn seed(&self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn contents(&self) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        Ok(serde_json::from_str(&std::fs::read_to_string(&self.path)?)?)
    }

    /// The binary pointed at this book, with `script` fed to the menu.
    pub fn session(&self, script: &str) -> Result<Command, Box<dyn std::error::Error>> {
        session_at(&self.path, script)
    }
}

pub fn session_at(path: &Path, script: &str) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env_remove("RUST_LOG")
        .arg("--file")
        .arg(path)
        .write_stdin(script.to_string());
    Ok(cmd)
}
