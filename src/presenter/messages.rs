use crate::error::{AppError, FailureKind};

/// Short reply shown to the user when a lookup fails.
///
/// Details stay in the logs; the user only learns which kind of failure it was.
pub fn user_message(error: &AppError) -> String {
    match error.failure_kind() {
        FailureKind::Provider(status) => {
            format!("❌ Riot API error (status {status}). Check console logs for details.")
        }
        FailureKind::NoMatch => "⚠️ No competitive matches found for this player.".to_string(),
        FailureKind::Internal => {
            "❌ Something went wrong. Double-check your configuration and region, then try again."
                .to_string()
        }
    }
}
