use crate::config::{Argon2Config, HashConfig, Pbkdf2Config};
use crate::core::error::{HashgenError, Result};
use crate::hash::{Scheme, Size};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use sha2::Sha256;
use std::time::Duration;

fn pbkdf2_hash(password: &[u8], salt: &[u8], config: &Pbkdf2Config) -> Vec<u8> {
    let mut out = vec![0u8; config.output_len];
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, config.iterations, &mut out);
    out
}

fn argon2_hash(password: &[u8], salt: &[u8], config: &Argon2Config) -> Result<Vec<u8>> {
    let params = Params::new(
        config.memory_kib,
        config.time_cost,
        config.parallelism,
        Some(config.output_len),
    )
    .map_err(|e| HashgenError::Hash(format!("invalid argon2 parameters: {}", e)))?;

    let mut out = vec![0u8; config.output_len];
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password_into(password, salt, &mut out)
        .map_err(|e| HashgenError::Hash(e.to_string()))?;
    Ok(out)
}

/// Derive the full hash: URL-safe base64 of `salt || raw`.
pub fn derive(password: &str, scheme: Scheme, config: &HashConfig) -> Result<String> {
    let salt = config.salt.as_bytes();
    let raw = match scheme {
        Scheme::Interactive => pbkdf2_hash(password.as_bytes(), salt, &config.pbkdf2),
        Scheme::Deep => argon2_hash(password.as_bytes(), salt, &config.argon2)?,
    };

    let mut payload = Vec::with_capacity(salt.len() + raw.len());
    payload.extend_from_slice(salt);
    payload.extend_from_slice(&raw);
    Ok(URL_SAFE.encode(payload))
}

/// All outputs must agree; the agreed value is returned.
pub fn check_consistent(outputs: Vec<String>) -> Result<String> {
    let mut iter = outputs.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| HashgenError::Hash("no derivation was run".to_string()))?;

    if iter.any(|other| other != first) {
        return Err(HashgenError::InconsistentOutputs);
    }

    Ok(first)
}

/// Run `derive` `config.rounds` times, pausing between runs, and accept the
/// result only if every run produced the same output.
pub async fn derive_reliable(password: &str, scheme: Scheme, config: &HashConfig) -> Result<String> {
    let delay = Duration::from_millis(config.round_delay_ms);
    let mut outputs = Vec::new();

    for round in 0..config.rounds {
        if round > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let password = password.to_string();
        let task_config = config.clone();
        let output = tokio::task::spawn_blocking(move || derive(&password, scheme, &task_config))
            .await
            .map_err(|e| anyhow::anyhow!("derivation task failed: {}", e))??;

        tracing::debug!("Round {} of {} complete", round + 1, config.rounds);
        outputs.push(output);
    }

    check_consistent(outputs)
}

/// Reliable derivation truncated to `size`.
pub async fn generate(
    password: &str,
    scheme: Scheme,
    size: Size,
    config: &HashConfig,
) -> Result<String> {
    let full = derive_reliable(password, scheme, config).await?;
    Ok(size.truncate(&full).to_string())
}
