pub mod account_api;
mod fetch_utils;
pub mod http_client;
pub mod match_api;
pub mod orchestrator;
pub mod ranked_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_riot_client;
// Re-export the call sites and the pipeline
pub use account_api::resolve_player_id;
pub use match_api::{fetch_last_competitive_match, fetch_match};
pub use orchestrator::{build_summary, summarize};
pub use ranked_api::fetch_current_rank;
