use crate::core::error::{HashgenError, Result};
use crate::core::process::{ChildEnv, ProcessExecutor};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Variables that would make an activated interpreter look outside the venv.
const CLEARED_VARS: &[&str] = &["PYTHONHOME"];

pub struct VenvExecutor {
    venv_path: PathBuf,
    project_dir: PathBuf,
}

impl VenvExecutor {
    pub fn new(project_dir: PathBuf, venv_dir: &str) -> Self {
        let venv_path = project_dir.join(venv_dir);
        Self {
            venv_path,
            project_dir,
        }
    }

    pub fn venv_path(&self) -> &Path {
        &self.venv_path
    }

    pub fn venv_exists(&self) -> bool {
        self.venv_path.is_dir()
    }

    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_path.join("Scripts")
        } else {
            self.venv_path.join("bin")
        }
    }

    fn get_executable_path(&self, command: &str) -> PathBuf {
        let bin_dir = self.bin_dir();
        if cfg!(windows) {
            bin_dir.join(format!("{}.exe", command))
        } else {
            bin_dir.join(command)
        }
    }

    /// Whether the venv ships its activation script.
    pub fn has_activation_script(&self) -> bool {
        let name = if cfg!(windows) {
            "activate.bat"
        } else {
            "activate"
        };
        self.bin_dir().join(name).is_file()
    }

    /// The venv's own interpreter, or bare `python` resolved through the
    /// activated `PATH` when the venv does not provide one.
    pub fn interpreter(&self) -> PathBuf {
        let python = self.get_executable_path("python");
        if python.is_file() {
            python
        } else {
            tracing::debug!(
                "{} missing, falling back to PATH lookup",
                python.display()
            );
            PathBuf::from("python")
        }
    }

    /// Environment of an activated venv, scoped to one child process.
    pub fn activation_env(&self) -> Result<ChildEnv> {
        let base_path = std::env::var_os("PATH");
        self.activation_env_from(base_path)
    }

    fn activation_env_from(&self, base_path: Option<OsString>) -> Result<ChildEnv> {
        let mut paths = vec![self.bin_dir()];
        if let Some(base) = base_path.as_deref() {
            paths.extend(std::env::split_paths(base));
        }

        let new_path = std::env::join_paths(paths).map_err(|e| {
            HashgenError::PythonEnv(format!(
                "cannot add {} to PATH: {}",
                self.bin_dir().display(),
                e
            ))
        })?;

        let prompt = self
            .venv_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("venv"));

        let mut env = ChildEnv::new()
            .set("VIRTUAL_ENV", self.venv_path.as_os_str())
            .set("VIRTUAL_ENV_PROMPT", prompt)
            .set("PATH", new_path)
            .current_dir(&self.project_dir);

        for var in CLEARED_VARS {
            env = env.remove(*var);
        }

        Ok(env)
    }

    /// Run a script with the venv interpreter, stdio passed through.
    pub async fn run_script(&self, script: &Path) -> Result<i32> {
        if !self.venv_exists() {
            return Err(HashgenError::MissingEnvironment(self.venv_path.clone()));
        }

        let env = self.activation_env()?;
        let interpreter = self.interpreter();
        tracing::debug!(
            "Running {} {}",
            interpreter.display(),
            script.display()
        );

        ProcessExecutor::run_inherited(&interpreter, &[script.as_os_str().to_os_string()], &env)
            .await
    }

    /// Ask the venv interpreter for its version string.
    pub async fn python_version(&self) -> Result<String> {
        if !self.venv_exists() {
            return Err(HashgenError::MissingEnvironment(self.venv_path.clone()));
        }

        let env = self.activation_env()?;
        ProcessExecutor::execute_with_output(
            &self.interpreter(),
            &[OsString::from("--version")],
            &env,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venv_executor_creation() {
        let project_dir = PathBuf::from("/tmp/test");
        let executor = VenvExecutor::new(project_dir.clone(), "venv");

        assert_eq!(executor.project_dir, project_dir);
        assert_eq!(executor.venv_path, project_dir.join("venv"));
    }

    #[test]
    fn test_executable_path() {
        let project_dir = PathBuf::from("/tmp/test");
        let executor = VenvExecutor::new(project_dir, "venv");

        let path = executor.get_executable_path("python");

        #[cfg(unix)]
        assert!(path.ends_with("venv/bin/python"));

        #[cfg(windows)]
        assert!(path.ends_with("venv\\Scripts\\python.exe"));
    }

    #[test]
    fn interpreter_falls_back_to_path_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let executor = VenvExecutor::new(dir.path().to_path_buf(), "venv");

        assert_eq!(executor.interpreter(), PathBuf::from("python"));

        std::fs::create_dir_all(executor.bin_dir()).unwrap();
        let python = executor.get_executable_path("python");
        std::fs::write(&python, "").unwrap();
        assert_eq!(executor.interpreter(), python);
    }

    #[test]
    fn activation_prefixes_path_and_sets_virtual_env() {
        let project_dir = PathBuf::from("/tmp/test");
        let executor = VenvExecutor::new(project_dir.clone(), "venv");

        let base = std::env::join_paths([PathBuf::from("/usr/bin"), PathBuf::from("/bin")])
            .unwrap();
        let env = executor.activation_env_from(Some(base)).unwrap();

        let path = env.get("PATH").unwrap();
        let entries: Vec<PathBuf> = std::env::split_paths(path).collect();
        assert_eq!(entries[0], executor.bin_dir());
        assert_eq!(entries[1], PathBuf::from("/usr/bin"));
        assert_eq!(entries.len(), 3);

        assert_eq!(env.get("VIRTUAL_ENV"), Some(executor.venv_path().as_os_str()));
        assert_eq!(env.get("VIRTUAL_ENV_PROMPT"), Some(std::ffi::OsStr::new("venv")));
        assert!(env.is_removed("PYTHONHOME"));
        assert_eq!(env.working_dir(), Some(project_dir.as_path()));
    }

    #[test]
    fn activation_without_inherited_path() {
        let executor = VenvExecutor::new(PathBuf::from("/tmp/test"), "venv");
        let env = executor.activation_env_from(None).unwrap();

        let entries: Vec<PathBuf> = std::env::split_paths(env.get("PATH").unwrap()).collect();
        assert_eq!(entries, vec![executor.bin_dir()]);
    }

    #[tokio::test]
    async fn run_script_requires_venv() {
        let dir = tempfile::tempdir().unwrap();
        let executor = VenvExecutor::new(dir.path().to_path_buf(), "venv");

        let err = executor
            .run_script(&dir.path().join("Hash_generator.py"))
            .await
            .unwrap_err();
        assert!(matches!(err, HashgenError::MissingEnvironment(_)));
    }
}
