//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, endpoint parameters and message
//! layout limits so they are defined in exactly one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Region used when neither the config file nor the environment names one
pub const DEFAULT_REGION: &str = "americas";

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "lastmatch_bot.log";

/// Name of the directory under the platform config dir
pub const APP_DIR_NAME: &str = "lastmatch_bot";

/// Riot API request parameters
pub mod riot {
    /// Header carrying the static API key (lowercase, as `HeaderName` requires)
    pub const TOKEN_HEADER: &str = "x-riot-token";

    /// Host template suffix; the region is the first label
    pub const API_HOST_SUFFIX: &str = "api.riotgames.com";

    /// Queue filter for the match history endpoint
    pub const COMPETITIVE_QUEUE: &str = "competitive";

    /// Only the most recent match is requested
    pub const MATCH_HISTORY_COUNT: u32 = 1;
}

/// Environment variable names read by the config loader
pub mod env_vars {
    pub const RIOT_API_KEY: &str = "RIOT_API_KEY";
    pub const RIOT_REGION: &str = "RIOT_REGION";
    pub const RIOT_API_BASE_URL: &str = "RIOT_API_BASE_URL";
    pub const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
    pub const GUILD_ID: &str = "GUILD_ID";
    pub const LOG_FILE: &str = "LASTMATCH_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "LASTMATCH_HTTP_TIMEOUT";
}

/// Match embed layout
pub mod embed {
    /// Embed colour for a won match
    pub const WIN_COLOUR: u32 = 0x00FF00;

    /// Embed colour for a lost match
    pub const LOSS_COLOUR: u32 = 0xFF0000;

    pub const FOOTER_TEXT: &str = "Data via Riot Games API";

    /// Discord rejects embeds with more fields than this
    pub const MAX_FIELDS: usize = 25;

    /// Discord limit for a single field value
    pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

    /// Start time layout in the embed description
    pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}
