//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, riot::TOKEN_HEADER};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Creates the Riot API client shared by every lookup.
///
/// The API key is installed as a default header and marked sensitive so it
/// never shows up in debug output. The client owns the connection pool and is
/// cheap to clone.
///
/// # Errors
/// * `AppError::Config` - If the API key is not a valid header value
/// * `AppError::ApiFetch` - If the underlying client cannot be built
pub fn create_riot_client(config: &Config) -> Result<Client, AppError> {
    let mut token = HeaderValue::from_str(config.riot_api_key.trim())
        .map_err(|_| AppError::config_error("Riot API key contains invalid characters"))?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(TOKEN_HEADER), token);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("lastmatch_bot/", env!("CARGO_PKG_VERSION"))),
    );

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()?;
    Ok(client)
}
