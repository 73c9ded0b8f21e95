// A launch runs four sequential steps against the launcher root: the venv
// directory must exist, the script must exist, the venv is activated for
// the child only, and the script is run once with the venv interpreter.

mod messages;

pub use messages::{acknowledge, missing_script_message, remediation_message, ACK_PROMPT};

use crate::config::LauncherConfig;
use crate::core::error::{HashgenError, Result};
use crate::python::VenvExecutor;
use std::path::{Path, PathBuf};

pub struct Launcher {
    root: PathBuf,
    config: LauncherConfig,
    venv: VenvExecutor,
}

impl Launcher {
    pub fn new(root: PathBuf, config: LauncherConfig) -> Self {
        let venv = VenvExecutor::new(root.clone(), &config.venv_dir);
        Self { root, config, venv }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn venv(&self) -> &VenvExecutor {
        &self.venv
    }

    pub fn script_path(&self) -> PathBuf {
        self.root.join(&self.config.script)
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.root.join(&self.config.requirements)
    }

    pub fn check_environment(&self) -> Result<()> {
        if !self.venv.venv_exists() {
            return Err(HashgenError::MissingEnvironment(
                self.venv.venv_path().to_path_buf(),
            ));
        }
        Ok(())
    }

    pub fn check_script(&self) -> Result<()> {
        let script = self.script_path();
        if !script.is_file() {
            return Err(HashgenError::MissingScript(script));
        }
        Ok(())
    }

    /// Both checks, venv first.
    pub fn preflight(&self) -> Result<()> {
        self.check_environment()?;
        self.check_script()
    }

    /// Run the script and return the exit code the launcher should report.
    pub async fn launch(&self) -> Result<i32> {
        tracing::debug!("Launcher root: {}", self.root.display());
        self.preflight()?;

        let code = self.venv.run_script(&self.script_path()).await?;
        tracing::debug!("{} exited with {}", self.config.script, code);

        if self.config.propagate_exit_code {
            Ok(code)
        } else {
            Ok(0)
        }
    }
}
