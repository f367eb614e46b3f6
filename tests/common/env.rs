//! Isolated environment for running the tsinit binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{APP_JS, INDEX_JS, PACKAGE_JSON};
use super::windows::WindowsCompatExt;

/// Result of one tsinit invocation
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON.
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON line ({e}): {l}\n{}", self.stdout))
            })
            .collect()
    }
}

/// Temp project + temp home.
///
/// Package installation and the compile step are switched off through the
/// environment unless a test opts back in, so no real yarn/npm/tsc runs.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    /// Empty project directory.
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
            env: vec![
                ("TSINIT_PACKAGES".to_string(), String::new()),
                ("TSINIT_COMPILE".to_string(), "0".to_string()),
            ],
        }
    }

    /// Project as generated by `react-native init`.
    pub fn react_native() -> Self {
        let env = Self::empty();
        env.write_project_file("package.json", PACKAGE_JSON);
        env.write_project_file("index.js", INDEX_JS);
        env.write_project_file("App.js", APP_JS);
        env
    }

    /// Set (or replace) an environment variable for every run.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.retain(|(k, _)| k != key);
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Drop one of the default overrides.
    pub fn without_env(mut self, key: &str) -> Self {
        self.env.retain(|(k, _)| k != key);
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write project file");
    }

    pub fn write_user_settings(&self, content: &str) {
        let dir = self.home_dir.path().join(".config").join("tsinit");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("write user settings");
    }

    /// Run tsinit from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsinit"));
        cmd.current_dir(cwd)
            .args(args)
            .with_test_home(self.home_dir.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("CI");
        for key in [
            "TSINIT_PRIMARY",
            "TSINIT_FALLBACK",
            "TSINIT_FALLBACK_POLICY",
            "TSINIT_ROOT_DIR",
            "TSINIT_OUT_DIR",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute tsinit"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Every file under `dir`, relative with `/` separators, sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else if let Ok(rel) = path.strip_prefix(base) {
                    out.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
    }

    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}
