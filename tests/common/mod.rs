//! Shared helpers for assetsync CLI tests.
//!
//! `TestProject` is a throwaway Flutter-style project (pubspec.yaml plus an
//! assets directory) with helpers to run the binary inside it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const PUBSPEC: &str = "name: demo_app\n\
description: A demo app\n\
\n\
flutter:\n\
  uses-material-design: true\n\
  assets: []\n";

/// Result of running the assetsync binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Parse every stdout line as a JSON object.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})"))
            })
            .collect()
    }
}

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// Project with the default pubspec and an empty `assets/` directory
    pub fn new() -> Self {
        Self::with_pubspec(PUBSPEC)
    }

    pub fn with_pubspec(pubspec: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), pubspec).unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create a file (and its parents) under the project root.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn pubspec(&self) -> String {
        self.read("pubspec.yaml")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_assetsync"));
        cmd.current_dir(self.root())
            .env("NO_COLOR", "1")
            .env_remove("ASSETSYNC_DEBOUNCE_MS")
            .env_remove("ASSETSYNC_STRATEGY")
            .env_remove("ASSETSYNC_OUTPUT");
        cmd
    }

    /// Run with `--color never` from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command()
            .args(args)
            .arg("--color")
            .arg("never")
            .output()
            .expect("failed to run assetsync");
        TestResult::from_output(output)
    }
}
