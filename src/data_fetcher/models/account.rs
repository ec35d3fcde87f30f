use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Riot ID as typed by the user: display name plus tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerHandle {
    display_name: String,
    tag: String,
}

impl PlayerHandle {
    /// Creates a handle. Both parts must contain something other than whitespace;
    /// anything else is left for the Riot API to judge.
    pub fn new(display_name: impl Into<String>, tag: impl Into<String>) -> Result<Self, AppError> {
        let display_name = display_name.into();
        let tag = tag.into();
        if display_name.trim().is_empty() {
            return Err(AppError::invalid_handle("display name cannot be empty"));
        }
        if tag.trim().is_empty() {
            return Err(AppError::invalid_handle("tag cannot be empty"));
        }
        Ok(Self { display_name, tag })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.display_name, self.tag)
    }
}

impl FromStr for PlayerHandle {
    type Err = AppError;

    /// Parses `Name#Tag`, splitting at the first `#`.
    fn from_str(riot_id: &str) -> Result<Self, Self::Err> {
        match riot_id.split_once('#') {
            Some((name, tag)) => PlayerHandle::new(name, tag),
            None => Err(AppError::invalid_handle(format!(
                "'{riot_id}' is not in the format Name#Tag"
            ))),
        }
    }
}

/// Stable player identifier (PUUID) used to key every lookup after the account call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(puuid: impl Into<String>) -> Self {
        Self(puuid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response of the account-by-riot-id endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AccountResponse {
    pub puuid: PlayerId,
    #[serde(rename = "gameName", default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(rename = "tagLine", default, skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_display() {
        let handle = PlayerHandle::new("Alice", "1234").unwrap();
        assert_eq!(handle.to_string(), "Alice#1234");
        assert_eq!(handle.display_name(), "Alice");
        assert_eq!(handle.tag(), "1234");
    }

    #[test]
    fn test_handle_rejects_empty_parts() {
        assert!(matches!(
            PlayerHandle::new("", "1234"),
            Err(AppError::InvalidHandle(_))
        ));
        assert!(matches!(
            PlayerHandle::new("Alice", "   "),
            Err(AppError::InvalidHandle(_))
        ));
    }

    #[test]
    fn test_handle_keeps_inner_spaces() {
        let handle = PlayerHandle::new("Sova Main", "EUW").unwrap();
        assert_eq!(handle.display_name(), "Sova Main");
    }

    #[test]
    fn test_handle_from_riot_id() {
        let handle: PlayerHandle = "Player#EUW1".parse().unwrap();
        assert_eq!(handle.display_name(), "Player");
        assert_eq!(handle.tag(), "EUW1");

        assert!("NoTagHere".parse::<PlayerHandle>().is_err());
        assert!("#1234".parse::<PlayerHandle>().is_err());
        assert!("Alice#".parse::<PlayerHandle>().is_err());
    }

    #[test]
    fn test_account_response_deserialization() {
        let json = r#"{"puuid":"P1","gameName":"Alice","tagLine":"1234"}"#;
        let account: AccountResponse = serde_json::from_str(json).unwrap();
        assert_eq!(account.puuid, PlayerId::new("P1"));
        assert_eq!(account.game_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_account_response_requires_puuid() {
        let json = r#"{"gameName":"Alice","tagLine":"1234"}"#;
        assert!(serde_json::from_str::<AccountResponse>(json).is_err());
    }
}
