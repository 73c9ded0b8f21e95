//! Shared harness for hashgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated launcher directory plus a separate caller directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    launcher_dir: PathBuf,
    caller_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let launcher_dir = root.path().join("launcher");
        let caller_dir = root.path().join("elsewhere");
        fs::create_dir_all(&launcher_dir).expect("Failed to create launcher dir");
        fs::create_dir_all(&caller_dir).expect("Failed to create caller dir");

        let launcher_dir = launcher_dir.canonicalize().expect("canonicalize launcher dir");
        Self {
            root,
            launcher_dir,
            caller_dir,
        }
    }

    pub fn launcher_dir(&self) -> &Path {
        &self.launcher_dir
    }

    /// File the fake interpreter appends its invocations to.
    pub fn call_log(&self) -> PathBuf {
        self.root.path().join("python-calls.log")
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.call_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// `hashgen` invoked from an unrelated directory with `--root` pointing at
    /// the launcher directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hashgen").expect("Failed to locate hashgen binary");
        cmd.current_dir(&self.caller_dir)
            .env_remove("HASHGEN_ROOT")
            .env("NO_COLOR", "1")
            .arg("--root")
            .arg(&self.launcher_dir);
        cmd
    }

    /// A copy of `hashgen` placed inside the launcher directory, invoked from
    /// an unrelated directory with no root override.
    pub fn installed_cli(&self) -> Command {
        let built = assert_cmd::cargo::cargo_bin("hashgen");
        let installed = self.launcher_dir.join(built.file_name().expect("binary file name"));
        fs::copy(&built, &installed).expect("Failed to copy hashgen into launcher dir");

        let mut cmd = Command::new(installed);
        cmd.current_dir(&self.caller_dir)
            .env_remove("HASHGEN_ROOT")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.launcher_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn create_venv_dir(&self) {
        fs::create_dir_all(self.launcher_dir.join("venv")).expect("Failed to create venv");
    }

    pub fn write_script(&self) {
        self.write_file("Hash_generator.py", "print('hash')\n");
    }

    /// Fake `venv/bin/python` that logs its arguments and reports where it ran.
    #[cfg(unix)]
    pub fn install_fake_python(&self, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.launcher_dir.join("venv").join("bin");
        fs::create_dir_all(&bin).expect("Failed to create venv bin");
        fs::write(bin.join("activate"), "").expect("Failed to write activate");

        let python = bin.join("python");
        let script = format!(
            r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "Python 3.12.0"
    exit 0
fi
echo "$@" >> "{log}"
echo "cwd=$(pwd -P)"
echo "venv=$VIRTUAL_ENV"
echo "pythonhome=${{PYTHONHOME:-unset}}"
exit {code}
"#,
            log = self.call_log().display(),
            code = exit_code
        );
        fs::write(&python, script).expect("Failed to write fake python");

        let mut perms = fs::metadata(&python).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&python, perms).expect("Failed to set permissions");
    }
}
