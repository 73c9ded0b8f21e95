use serde::{Deserialize, Serialize};

pub const DEFAULT_VENV_DIR: &str = "venv";
pub const DEFAULT_SCRIPT: &str = "Hash_generator.py";
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";
pub const DEFAULT_SALT: &str = "Something_[]_ASDF";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct HashgenConfig {
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub hash: HashConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LauncherConfig {
    #[serde(default = "default_venv_dir")]
    pub venv_dir: String,
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default = "default_requirements")]
    pub requirements: String,
    #[serde(default = "default_true")]
    pub pause_on_error: bool,
    #[serde(default = "default_true")]
    pub propagate_exit_code: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct HashConfig {
    #[serde(default = "default_salt")]
    pub salt: String,
    /// Number of derivations compared before a result is accepted.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default = "default_round_delay_ms")]
    pub round_delay_ms: u64,
    #[serde(default)]
    pub pbkdf2: Pbkdf2Config,
    #[serde(default)]
    pub argon2: Argon2Config,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Pbkdf2Config {
    #[serde(default = "default_pbkdf2_iterations")]
    pub iterations: u32,
    #[serde(default = "default_output_len")]
    pub output_len: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Argon2Config {
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    #[serde(default = "default_argon2_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    #[serde(default = "default_output_len")]
    pub output_len: usize,
}

fn default_venv_dir() -> String {
    DEFAULT_VENV_DIR.to_string()
}

fn default_script() -> String {
    DEFAULT_SCRIPT.to_string()
}

fn default_requirements() -> String {
    DEFAULT_REQUIREMENTS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_salt() -> String {
    DEFAULT_SALT.to_string()
}

fn default_rounds() -> u32 {
    3
}

fn default_round_delay_ms() -> u64 {
    1000
}

fn default_pbkdf2_iterations() -> u32 {
    500_000
}

fn default_output_len() -> usize {
    512
}

fn default_argon2_time_cost() -> u32 {
    10
}

fn default_argon2_memory_kib() -> u32 {
    102_400
}

fn default_argon2_parallelism() -> u32 {
    4
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            venv_dir: default_venv_dir(),
            script: default_script(),
            requirements: default_requirements(),
            pause_on_error: default_true(),
            propagate_exit_code: default_true(),
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            salt: default_salt(),
            rounds: default_rounds(),
            round_delay_ms: default_round_delay_ms(),
            pbkdf2: Pbkdf2Config::default(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Pbkdf2Config {
    fn default() -> Self {
        Self {
            iterations: default_pbkdf2_iterations(),
            output_len: default_output_len(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            time_cost: default_argon2_time_cost(),
            memory_kib: default_argon2_memory_kib(),
            parallelism: default_argon2_parallelism(),
            output_len: default_output_len(),
        }
    }
}
