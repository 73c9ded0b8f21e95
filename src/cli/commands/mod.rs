pub mod doctor;
pub mod generate;
pub mod launch;

use crate::config::{ConfigManager, HashgenConfig};
use crate::core::error::Result;
use crate::core::path::resolve_root;
use std::path::{Path, PathBuf};

/// Resolved launcher root plus its configuration, shared by all commands.
pub struct Context {
    pub root: PathBuf,
    pub config: HashgenConfig,
    pub config_path: Option<PathBuf>,
    pub pause: bool,
}

impl Context {
    pub async fn load(root_override: Option<&Path>, no_pause: bool) -> Result<Self> {
        let root = resolve_root(root_override)?;
        let manager = ConfigManager::new(&root);
        let config = manager.load().await?;
        let config_path = manager
            .exists()
            .then(|| manager.config_path().to_path_buf());
        let pause = !no_pause && config.launcher.pause_on_error;

        Ok(Self {
            root,
            config,
            config_path,
            pause,
        })
    }
}
