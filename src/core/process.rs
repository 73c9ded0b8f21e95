use crate::core::error::{HashgenError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tokio::process::Command;

/// Environment handed to a single child process.
///
/// Nothing here touches the parent's own environment: variables are set,
/// removed and the working directory chosen on the spawned command only.
#[derive(Debug, Clone, Default)]
pub struct ChildEnv {
    vars: Vec<(OsString, OsString)>,
    removed: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ChildEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        let key = key.into();
        self.removed.retain(|k| *k != key);
        self.vars.retain(|(k, _)| *k != key);
        self.vars.push((key, value.into()));
        self
    }

    pub fn remove(mut self, key: impl Into<OsString>) -> Self {
        let key = key.into();
        self.vars.retain(|(k, _)| *k != key);
        self.removed.push(key);
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&std::ffi::OsStr> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    #[cfg(test)]
    pub(crate) fn is_removed(&self, key: &str) -> bool {
        self.removed.iter().any(|k| k == key)
    }

    #[cfg(test)]
    pub(crate) fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    fn apply(&self, command: &mut Command) {
        for key in &self.removed {
            command.env_remove(key);
        }
        for (key, value) in &self.vars {
            command.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
    }
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    fn command(cmd: &Path, args: &[OsString], env: &ChildEnv) -> Command {
        let mut command = Command::new(cmd);
        command.args(args);
        env.apply(&mut command);
        command
    }

    pub async fn execute(cmd: &Path, args: &[OsString], env: &ChildEnv) -> Result<Output> {
        let output = Self::command(cmd, args, env)
            .output()
            .await
            .map_err(|e| HashgenError::CommandFailed(format!("{}: {}", cmd.display(), e)))?;

        Ok(output)
    }

    /// Run with stdio passed through and wait for the child to finish.
    pub async fn run_inherited(cmd: &Path, args: &[OsString], env: &ChildEnv) -> Result<i32> {
        let status = Self::command(cmd, args, env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                HashgenError::CommandFailed(format!("Failed to execute {}: {}", cmd.display(), e))
            })?;

        Ok(status.code().unwrap_or(1))
    }

    pub async fn execute_with_output(
        cmd: &Path,
        args: &[OsString],
        env: &ChildEnv,
    ) -> Result<String> {
        let output = Self::execute(cmd, args, env).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HashgenError::CommandFailed(format!(
                "{} failed: {}",
                cmd.display(),
                stderr.trim()
            )));
        }

        // Older interpreters print `--version` to stderr.
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
        } else {
            Ok(stdout)
        }
    }
}
