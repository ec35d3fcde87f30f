use crate::error::AppError;
use std::path::Path;

/// Validates the settings every mode needs to reach the Riot API.
///
/// # Validation Rules
/// - API key cannot be empty
/// - Region cannot be empty and must be a single lowercase host label
/// - A base URL override must carry an http:// or https:// scheme
/// - HTTP timeout must be positive
/// - If a log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    riot_api_key: &str,
    region: &str,
    api_base_url: &Option<String>,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if riot_api_key.trim().is_empty() {
        return Err(AppError::config_error(
            "Riot API key is missing (set RIOT_API_KEY or riot_api_key in config)",
        ));
    }

    validate_region(region)?;

    if let Some(base_url) = api_base_url
        && !base_url.starts_with("http://")
        && !base_url.starts_with("https://")
    {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https://, got '{base_url}'"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// The region becomes the first label of the API host, so it has to be a plain
/// lowercase alphanumeric label.
pub fn validate_region(region: &str) -> Result<(), AppError> {
    if region.is_empty() {
        return Err(AppError::config_error("Region cannot be empty"));
    }
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(AppError::config_error(format!(
            "Region '{region}' must contain only lowercase letters and digits"
        )));
    }
    Ok(())
}

/// Validates the Discord credentials required to run the bot.
pub fn validate_bot_credentials(
    discord_token: &Option<String>,
    guild_id: Option<u64>,
) -> Result<(), AppError> {
    match discord_token {
        Some(token) if !token.trim().is_empty() => {}
        _ => {
            return Err(AppError::config_error(
                "Discord token is missing (set DISCORD_TOKEN or discord_token in config)",
            ));
        }
    }
    if guild_id.is_none() {
        return Err(AppError::config_error(
            "Guild ID is missing (set GUILD_ID or guild_id in config)",
        ));
    }
    Ok(())
}
