//! URL building utilities for Riot API endpoints
//!
//! Caller-supplied values (Riot ID parts, PUUIDs, match ids) are appended as
//! percent-encoded path segments, so reserved characters such as `?`, `/` or
//! `#` stay inside their segment and can never select another resource.

use crate::constants::riot::{API_HOST_SUFFIX, COMPETITIVE_QUEUE, MATCH_HISTORY_COUNT};
use crate::error::AppError;
use reqwest::Url;

/// Builds the regional API base URL.
///
/// # Example
/// ```
/// use lastmatch_bot::data_fetcher::api::build_api_base_url;
///
/// assert_eq!(build_api_base_url("americas"), "https://americas.api.riotgames.com");
/// ```
pub fn build_api_base_url(region: &str) -> String {
    format!("https://{region}.{API_HOST_SUFFIX}")
}

/// Appends `segments` to the path of `api_base`, encoding each one.
fn endpoint_url(api_base: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(api_base)
        .map_err(|e| AppError::config_error(format!("Invalid API base URL '{api_base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("API base URL '{api_base}' cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Builds the account lookup URL for a Riot ID.
///
/// # Example
/// ```
/// use lastmatch_bot::data_fetcher::api::build_account_url;
///
/// let url = build_account_url("https://americas.api.riotgames.com", "Alice", "1234")?;
/// assert_eq!(
///     url,
///     "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Alice/1234"
/// );
///
/// let url = build_account_url("https://americas.api.riotgames.com", "Ali ce", "12?34")?;
/// assert!(url.ends_with("/by-riot-id/Ali%20ce/12%3F34"));
/// # Ok::<(), lastmatch_bot::AppError>(())
/// ```
pub fn build_account_url(api_base: &str, game_name: &str, tag_line: &str) -> Result<String, AppError> {
    let url = endpoint_url(
        api_base,
        &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
    )?;
    Ok(url.into())
}

/// Builds the competitive match history URL, limited to the most recent match.
///
/// # Example
/// ```
/// use lastmatch_bot::data_fetcher::api::build_matchlist_url;
///
/// let url = build_matchlist_url("https://eu.api.riotgames.com", "P1")?;
/// assert_eq!(
///     url,
///     "https://eu.api.riotgames.com/val/match/v1/matchlists/by-puuid/P1?queue=competitive&count=1"
/// );
/// # Ok::<(), lastmatch_bot::AppError>(())
/// ```
pub fn build_matchlist_url(api_base: &str, puuid: &str) -> Result<String, AppError> {
    let mut url = endpoint_url(api_base, &["val", "match", "v1", "matchlists", "by-puuid", puuid])?;
    url.query_pairs_mut()
        .append_pair("queue", COMPETITIVE_QUEUE)
        .append_pair("count", &MATCH_HISTORY_COUNT.to_string());
    Ok(url.into())
}

/// Builds the match detail URL.
///
/// # Example
/// ```
/// use lastmatch_bot::data_fetcher::api::build_match_url;
///
/// let url = build_match_url("https://eu.api.riotgames.com", "M1")?;
/// assert_eq!(url, "https://eu.api.riotgames.com/val/match/v1/matches/M1");
/// # Ok::<(), lastmatch_bot::AppError>(())
/// ```
pub fn build_match_url(api_base: &str, match_id: &str) -> Result<String, AppError> {
    let url = endpoint_url(api_base, &["val", "match", "v1", "matches", match_id])?;
    Ok(url.into())
}

/// Builds the ranked player URL.
///
/// # Example
/// ```
/// use lastmatch_bot::data_fetcher::api::build_ranked_url;
///
/// let url = build_ranked_url("https://eu.api.riotgames.com", "P1")?;
/// assert_eq!(url, "https://eu.api.riotgames.com/val/ranked/v1/players/P1");
/// # Ok::<(), lastmatch_bot::AppError>(())
/// ```
pub fn build_ranked_url(api_base: &str, puuid: &str) -> Result<String, AppError> {
    let url = endpoint_url(api_base, &["val", "ranked", "v1", "players", puuid])?;
    Ok(url.into())
}
