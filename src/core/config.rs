//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.solpower/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::advice::providers::{DEFAULT_GEMINI_BASE_URL, DEFAULT_OPENROUTER_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SolpowerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: ProviderConfig,
    #[serde(default)]
    pub openrouter: ProviderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_OPENROUTER_MODEL: &str = "google/gemini-2.0-flash-001";

/// Env vars checked for an API key, in order.
const GEMINI_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];
const OPENROUTER_KEY_VARS: &[&str] = &["OPENROUTER_API_KEY"];

// ============================================================================
// Resolved Config (concrete values, Options only where absence is meaningful)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// "gemini" or "openrouter".
    pub provider: String,
    pub model: String,
    /// None means the advice service is unconfigured.
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Values the caller pulled from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.solpower/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".solpower").join("config.toml"))
}

/// Load config from `~/.solpower/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SolpowerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SolpowerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SolpowerConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SolpowerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SolpowerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SolpowerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: provider={:?}, gemini key set={}, openrouter key set={}",
        config.general.default_provider,
        config.gemini.api_key.is_some(),
        config.openrouter.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# SOLPOWER Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "gemini"       # "gemini" or "openrouter"

# [gemini]
# api_key = "..."                    # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# model = "gemini-2.0-flash"

# [openrouter]
# api_key = "sk-or-..."              # Or set OPENROUTER_API_KEY env var
# base_url = "https://openrouter.ai/api/v1"
# model = "google/gemini-2.0-flash-001"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SolpowerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &SolpowerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli
        .provider
        .clone()
        .or_else(|| env("SOLPOWER_PROVIDER"))
        .or_else(|| config.general.default_provider.clone())
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let (provider, section, key_vars, url_var, default_url, default_model) =
        if provider == "openrouter" {
            (
                "openrouter",
                &config.openrouter,
                OPENROUTER_KEY_VARS,
                "OPENROUTER_BASE_URL",
                DEFAULT_OPENROUTER_BASE_URL,
                DEFAULT_OPENROUTER_MODEL,
            )
        } else {
            if provider != "gemini" {
                warn!("Unknown provider '{}', using gemini", provider);
            }
            (
                "gemini",
                &config.gemini,
                GEMINI_KEY_VARS,
                "GEMINI_BASE_URL",
                DEFAULT_GEMINI_BASE_URL,
                DEFAULT_GEMINI_MODEL,
            )
        };

    // API key: env → config
    let api_key = key_vars
        .iter()
        .find_map(|&var| env(var))
        .or_else(|| section.api_key.clone())
        .filter(|k| !k.trim().is_empty());

    // Base URL: env → config → default
    let base_url = env(url_var)
        .or_else(|| section.base_url.clone())
        .unwrap_or_else(|| default_url.to_string());

    // Model: CLI → env → config → default
    let model = cli
        .model
        .clone()
        .or_else(|| env("ADVICE_MODEL"))
        .or_else(|| section.model.clone())
        .unwrap_or_else(|| default_model.to_string());

    ResolvedConfig {
        provider: provider.to_string(),
        model,
        api_key,
        base_url,
    }
}
