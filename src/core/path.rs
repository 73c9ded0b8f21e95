use crate::core::error::{HashgenError, Result};
use std::path::{Component, Path, PathBuf};

/// Directory holding the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        HashgenError::Config(format!(
            "cannot determine directory of {}",
            exe.display()
        ))
    })
}

/// Resolve the launcher root: an explicit override (relative to the caller's
/// cwd) or the executable's own directory.
pub fn resolve_root(override_dir: Option<&Path>) -> Result<PathBuf> {
    let root = match override_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => std::env::current_dir()?.join(dir),
        None => executable_dir()?,
    };

    if !root.is_dir() {
        return Err(HashgenError::Config(format!(
            "launcher root {} is not a directory",
            root.display()
        )));
    }

    Ok(root.canonicalize().unwrap_or(root))
}

/// True when `path` is relative and never climbs above its base.
pub fn is_contained(path: &str) -> bool {
    let path = Path::new(path);
    !path.is_absolute()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
