use crate::errors::{ChatError, ChatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, sync::RwLock};

pub const DEFAULT_NO_RESPONSE_TEXT: &str = "No response received";
pub const DEFAULT_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub chat_path: String,
    pub health_path: String,
    pub no_response_text: String,
    pub error_text: String,
    pub max_input_rows: u16,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            chat_path: "/api/chat".to_string(),
            health_path: "/api/health".to_string(),
            no_response_text: DEFAULT_NO_RESPONSE_TEXT.to_string(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            max_input_rows: 5,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.chat_path)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.health_path)
    }

    /// Directory the log files go to. Falls back to `<config dir>/logs`.
    pub fn resolved_log_dir(&self) -> ChatResult<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(config_dir()?.join("logs")),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ChatResult<()> {
    let config_path = get_config_path()?;
    let config = apply_overrides(load_or_create(&config_path)?, |key| dotenv::var(key).ok())?;

    *CONFIG.write().unwrap_or_else(|e| e.into_inner()) = config;
    Ok(())
}

/// Reads the config at `path`, writing the defaults there first if the file
/// does not exist yet.
pub fn load_or_create(path: &Path) -> ChatResult<Config> {
    if path.exists() {
        let config_str = fs::read_to_string(path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)
        .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

/// Applies `GUARDCHAT_*` overrides looked up through `lookup`, then
/// validates the result.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> ChatResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("GUARDCHAT_BASE_URL") {
        config.base_url = url;
    }
    if let Some(level) = lookup("GUARDCHAT_LOG_LEVEL") {
        config.log_level = level;
    }

    validate_config(&config)?;
    Ok(config)
}

fn config_dir() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("guardchat"))
}

fn get_config_path() -> ChatResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        return Err(ChatError::config_error(
            "base_url must start with http:// or https://",
        ));
    }

    if !config.chat_path.starts_with('/') {
        return Err(ChatError::config_error("chat_path must start with '/'"));
    }

    if !config.health_path.starts_with('/') {
        return Err(ChatError::config_error("health_path must start with '/'"));
    }

    if config.max_input_rows == 0 {
        return Err(ChatError::config_error(
            "max_input_rows must be greater than 0",
        ));
    }

    if config.no_response_text.trim().is_empty() || config.error_text.trim().is_empty() {
        return Err(ChatError::config_error("fallback texts must not be empty"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}
