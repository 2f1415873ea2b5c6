//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `PRODBOARD_API_URL` is absent, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, uses built-in defaults
//!
//! ## Environment Variables
//! - `PRODBOARD_API_URL`: Server origin (required for the env path)
//! - `PRODBOARD_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `PRODBOARD_TOKEN_BACKEND`: `file`, `keychain` or `memory`
//! - `PRODBOARD_TOKEN_PATH`: Session file for the `file` backend
//! - `PRODBOARD_DOWNLOAD_DIR`: Directory for downloaded reports
//! - `PRODBOARD_LOG_FILTER`: Default tracing filter
//! - `PRODBOARD_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./prodboard.toml` or `./prodboard.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use prodboard_domain::{Config, ProdboardError, Result};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["prodboard.toml", "prodboard.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win whenever `PRODBOARD_API_URL` is set; an invalid
/// value among them is an error, never a reason to fall back.
///
/// # Errors
/// Returns `ProdboardError::Config` if a source is present but invalid.
pub fn load() -> Result<Config> {
    if optional_env("PRODBOARD_API_URL").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }
    tracing::debug!("PRODBOARD_API_URL not set, trying file");

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No config file found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `PRODBOARD_API_URL` must be set; every other variable is optional and
/// falls back to the default value.
///
/// # Errors
/// Returns `ProdboardError::Config` if the URL is missing or any variable has
/// an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.api.base_url = env_var("PRODBOARD_API_URL")?;
    if let Some(timeout) = optional_env("PRODBOARD_API_TIMEOUT_SECS") {
        let seconds = timeout
            .parse::<u64>()
            .map_err(|e| ProdboardError::Config(format!("Invalid API timeout: {e}")))?;
        config.api.timeout_seconds = Some(seconds);
    }

    if let Some(backend) = optional_env("PRODBOARD_TOKEN_BACKEND") {
        config.storage.backend = backend
            .parse()
            .map_err(|e: ProdboardError| ProdboardError::Config(e.message().to_string()))?;
    }
    if let Some(path) = optional_env("PRODBOARD_TOKEN_PATH") {
        config.storage.token_path = PathBuf::from(path);
    }
    if let Some(dir) = optional_env("PRODBOARD_DOWNLOAD_DIR") {
        config.downloads.directory = PathBuf::from(dir);
    }
    if let Some(filter) = optional_env("PRODBOARD_LOG_FILTER") {
        config.logging.filter = filter;
    }
    config.logging.json = env_bool("PRODBOARD_LOG_JSON", config.logging.json);

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ProdboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ProdboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ProdboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ProdboardError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ProdboardError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ProdboardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ProdboardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// The API URL must be an absolute http(s) URL
fn validate(config: &Config) -> Result<()> {
    let url = Url::parse(&config.api.base_url).map_err(|e| {
        ProdboardError::Config(format!("Invalid API URL {}: {e}", config.api.base_url))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProdboardError::Config(format!("Unsupported API URL scheme: {}", url.scheme())));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ProdboardError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        ProdboardError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Non-empty environment variable
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
