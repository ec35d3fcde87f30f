use poise::serenity_prelude as serenity;
use thiserror::Error;

/// User-facing class of a failure. Every error renders as exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The Riot API answered with a non-success status or a payload we could not read.
    Provider(u16),
    /// The player has no competitive match history.
    NoMatch,
    /// Anything else: transport failures, data inconsistencies, configuration.
    Internal,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Riot API error ({status}): {message} (URL: {url})")]
    Provider {
        status: u16,
        message: String,
        url: String,
    },

    #[error("No competitive matches found for player {player}")]
    NoMatchFound { player: String },

    #[error("Player {player} is not a participant of match {match_id}")]
    SelfNotFound { player: String, match_id: String },

    #[error("Invalid Riot ID: {0}")]
    InvalidHandle(String),

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a provider error for a non-success HTTP status
    pub fn provider(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a provider error for a response whose body does not match the expected shape.
    /// The status is the (successful) status the body arrived with.
    pub fn provider_malformed(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::Provider {
            status,
            message: format!("malformed response: {}", message.into()),
            url: url.into(),
        }
    }

    pub fn no_match_found(player: impl Into<String>) -> Self {
        Self::NoMatchFound {
            player: player.into(),
        }
    }

    pub fn self_not_found(player: impl Into<String>, match_id: impl Into<String>) -> Self {
        Self::SelfNotFound {
            player: player.into(),
            match_id: match_id.into(),
        }
    }

    pub fn invalid_handle(msg: impl Into<String>) -> Self {
        Self::InvalidHandle(msg.into())
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Classifies the error into the message shape the user gets to see.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            AppError::Provider { status, .. } => FailureKind::Provider(*status),
            AppError::NoMatchFound { .. } => FailureKind::NoMatch,
            _ => FailureKind::Internal,
        }
    }

    /// HTTP status carried by provider errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, AppError::Provider { .. })
    }
}
