pub mod project;
pub mod schema;
pub mod validation;

pub use project::ConfigManager;
pub use schema::{Argon2Config, HashConfig, HashgenConfig, LauncherConfig, Pbkdf2Config};
pub use validation::validate_config;
