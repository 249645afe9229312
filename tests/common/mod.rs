//! Shared testing utilities for prompter CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config-bearing environment variables cleared from every invocation so
/// the developer's own settings never leak into a test.
const CONFIG_ENV_VARS: [&str; 9] = [
    "PROMPTER_TEMPLATES_ROOT",
    "PROMPTER_LOCAL_TEMPLATES_ROOT",
    "PROMPTER_EDITOR",
    "PROMPTER_DEFAULT_PRE",
    "PROMPTER_DEFAULT_POST",
    "PROMPTER_FIX_FILE",
    "PROMPTER_DIRECTORY_STRATEGY",
    "PROMPTER_TARGET",
    "PROMPTER_INTERACTIVE_DEFAULT",
];

/// Testing harness providing an isolated `$HOME` and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The default templates root under the emulated home.
    pub fn templates_root(&self) -> PathBuf {
        self.home().join(".config").join("prompter")
    }

    /// Build a command for invoking the compiled `prompter` binary.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir.clone())
    }

    /// Build a command for invoking the binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("prompter").expect("Failed to locate prompter binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env_remove("VISUAL")
            .env_remove("EDITOR");
        for var in CONFIG_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a template file under the default templates root.
    pub fn write_template(&self, kind: &str, stem: &str, content: &str) -> PathBuf {
        let dir = self.templates_root().join(kind);
        fs::create_dir_all(&dir).expect("Failed to create template directory");
        let path = dir.join(format!("{stem}.md"));
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    /// Write a root-level template file such as `fix.md`.
    pub fn write_root_template(&self, file_name: &str, content: &str) -> PathBuf {
        let dir = self.templates_root();
        fs::create_dir_all(&dir).expect("Failed to create templates root");
        let path = dir.join(file_name);
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    /// Write the config file at its default location.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.templates_root();
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write a fix file inside the work directory and return its path.
    pub fn write_fix_file(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("fix-capture.txt");
        fs::write(&path, content).expect("Failed to write fix file");
        path
    }
}
