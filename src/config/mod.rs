use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_REGION, LOG_FILE_NAME, env_vars};
use crate::data_fetcher::api::build_api_base_url;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_bot_credentials, validate_config};

/// Configuration structure for the application.
/// Built once at startup and passed by reference to everything that needs it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Static Riot Games API key, sent as the `X-Riot-Token` header.
    #[serde(default)]
    pub riot_api_key: String,
    /// Routing region; selects the API host (`https://{region}.api.riotgames.com`).
    #[serde(default = "default_region")]
    pub region: String,
    /// Discord bot token. Only required when running the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_token: Option<String>,
    /// Guild the slash command is registered in. Only required when running the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<u64>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Replaces the regional Riot host, e.g. for a proxy or a local mock server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            riot_api_key: String::new(),
            region: default_region(),
            discord_token: None,
            guild_id: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            api_base_url: None,
        }
    }
}

/// Reads a trimmed, non-empty environment variable.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Loads configuration from the default config file location and applies
    /// environment overrides on top of it.
    ///
    /// # Environment Variables
    /// - `RIOT_API_KEY` - Riot API key
    /// - `RIOT_REGION` - Routing region (lower-cased)
    /// - `RIOT_API_BASE_URL` - Override the regional API host
    /// - `DISCORD_TOKEN` - Discord bot token
    /// - `GUILD_ID` - Guild to register the slash command in
    /// - `LASTMATCH_LOG_FILE` - Override log file path
    /// - `LASTMATCH_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Notes
    /// - A missing config file is not an error; everything can come from the environment
    /// - Environment variables take precedence over config file values
    /// - The result is validated for the Riot API; bot credentials are checked separately
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unvalidated().await?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::load`] without validation. Used where an incomplete
    /// config is still useful, e.g. to find the log file before the API key is set.
    pub async fn load_unvalidated() -> Result<Self, AppError> {
        let mut config = Self::load_file_or_default(&get_config_path()).await?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Loads the config file at `path`, or the defaults when the file does not exist.
    /// Environment variables are not consulted.
    pub async fn load_file_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides file values with whatever the environment provides.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Some(api_key) = env_value(env_vars::RIOT_API_KEY) {
            self.riot_api_key = api_key;
        }

        if let Some(region) = env_value(env_vars::RIOT_REGION) {
            self.region = region.to_lowercase();
        }

        if let Some(base_url) = env_value(env_vars::RIOT_API_BASE_URL) {
            self.api_base_url = Some(base_url);
        }

        if let Some(token) = env_value(env_vars::DISCORD_TOKEN) {
            self.discord_token = Some(token);
        }

        if let Some(guild_id) = env_value(env_vars::GUILD_ID) {
            let parsed = guild_id.parse::<u64>().map_err(|_| {
                AppError::config_error(format!("GUILD_ID must be an integer, got '{guild_id}'"))
            })?;
            self.guild_id = Some(parsed);
        }

        if let Some(log_file_path) = env_value(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) =
            env_value(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        Ok(())
    }

    /// Validates the settings needed to call the Riot API
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.riot_api_key,
            &self.region,
            &self.api_base_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Validates the extra settings needed to run the Discord bot
    pub fn validate_for_bot(&self) -> Result<(), AppError> {
        self.validate()?;
        validate_bot_credentials(&self.discord_token, self.guild_id)
    }

    /// Base URL every Riot endpoint is built on, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => build_api_base_url(&self.region),
        }
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.riot_api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows the effective configuration (file plus environment)
    /// - The API key and Discord token are never printed in full
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config = Self::load_unvalidated().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created yet, using environment and defaults)");
        }
        println!("────────────────────────────────────");
        println!("Region:");
        println!("{}", config.region);
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url());
        println!("────────────────────────────────────");
        println!("Riot API Key:");
        if config.riot_api_key.is_empty() {
            println!("(not set)");
        } else {
            println!("{}", config.masked_api_key());
        }
        println!("────────────────────────────────────");
        println!("Discord:");
        println!(
            "token {}, guild {}",
            if config.discord_token.is_some() {
                "set"
            } else {
                "not set"
            },
            config
                .guild_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "not set".to_string())
        );
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
