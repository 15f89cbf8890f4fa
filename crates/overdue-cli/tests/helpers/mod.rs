use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running the binary headlessly against fixture files in
/// a temporary directory, with an isolated settings file.
pub struct CliTestHarness {
    temp_dir: TempDir,
    settings_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let settings_path = temp_dir.path().join("overdue.env");
        Self {
            temp_dir,
            settings_path,
        }
    }

    /// Writes a fixture file into the temp directory and returns its path.
    pub fn write_fixture(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    pub fn settings_path(&self) -> &std::path::Path {
        &self.settings_path
    }

    /// A Command pointed at this harness's settings file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("overdue").expect("Failed to find overdue binary");
        cmd.arg("--settings-file").arg(&self.settings_path);
        cmd
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// A CSV whose evaluation against `--today 2024-06-01` is known: one task
/// 152 days overdue, one due today, one future, one unparseable.
pub const SAMPLE_CSV: &str = "Due,Task\n\
    2024-01-01,Pay rent\n\
    2024-06-01,Submit report\n\
    2099-01-01,Future task\n\
    garbage,Broken\n";

pub const SAMPLE_TODAY: &str = "2024-06-01";
