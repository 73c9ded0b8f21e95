use crate::config::schema::{Argon2Config, HashConfig, HashgenConfig, LauncherConfig};
use crate::core::error::{HashgenError, Result};
use crate::core::path::is_contained;

/// Argon2 refuses salts shorter than this.
pub const MIN_SALT_LEN: usize = 8;
pub const MAX_ROUNDS: u32 = 100;
pub const MAX_OUTPUT_LEN: usize = 4096;
/// 1 GiB; Argon2 allocates the whole matrix up front.
pub const MAX_ARGON2_MEMORY_KIB: u32 = 1024 * 1024;

fn validate_output_len(field: &str, len: usize, min: usize) -> Result<()> {
    if len < min || len > MAX_OUTPUT_LEN {
        return Err(HashgenError::Config(format!(
            "{} must be between {} and {}",
            field, min, MAX_OUTPUT_LEN
        )));
    }
    Ok(())
}

fn validate_relative(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HashgenError::Config(format!("{} cannot be empty", field)));
    }

    if !is_contained(value) {
        return Err(HashgenError::Config(format!(
            "{} must be a relative path inside the launcher directory",
            field
        )));
    }

    Ok(())
}

fn validate_launcher_config(config: &LauncherConfig) -> Result<()> {
    validate_relative("launcher.venv_dir", &config.venv_dir)?;
    validate_relative("launcher.script", &config.script)?;

    if config.requirements.trim().is_empty() {
        return Err(HashgenError::Config(
            "launcher.requirements cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_argon2(config: &Argon2Config) -> Result<()> {
    if config.time_cost == 0 {
        return Err(HashgenError::Config(
            "hash.argon2.time_cost must be > 0".to_string(),
        ));
    }

    if config.parallelism == 0 {
        return Err(HashgenError::Config(
            "hash.argon2.parallelism must be > 0".to_string(),
        ));
    }

    if config.memory_kib < config.parallelism.saturating_mul(8) {
        return Err(HashgenError::Config(
            "hash.argon2.memory_kib must be at least 8 * parallelism".to_string(),
        ));
    }

    if config.memory_kib > MAX_ARGON2_MEMORY_KIB {
        return Err(HashgenError::Config(format!(
            "hash.argon2.memory_kib must be at most {}",
            MAX_ARGON2_MEMORY_KIB
        )));
    }

    validate_output_len("hash.argon2.output_len", config.output_len, 4)
}

fn validate_hash_config(config: &HashConfig) -> Result<()> {
    if config.salt.len() < MIN_SALT_LEN {
        return Err(HashgenError::Config(format!(
            "hash.salt must be at least {} bytes",
            MIN_SALT_LEN
        )));
    }

    if config.rounds == 0 || config.rounds > MAX_ROUNDS {
        return Err(HashgenError::Config(format!(
            "hash.rounds must be between 1 and {}",
            MAX_ROUNDS
        )));
    }

    if config.pbkdf2.iterations == 0 {
        return Err(HashgenError::Config(
            "hash.pbkdf2.iterations must be > 0".to_string(),
        ));
    }

    validate_output_len("hash.pbkdf2.output_len", config.pbkdf2.output_len, 1)?;

    validate_argon2(&config.argon2)
}

pub fn validate_config(config: &HashgenConfig) -> Result<()> {
    validate_launcher_config(&config.launcher)?;
    validate_hash_config(&config.hash)
}
