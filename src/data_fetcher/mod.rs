pub mod api;
pub mod models;
pub mod tiers;

pub use api::{build_summary, create_riot_client};
pub use models::{MatchSummary, PlayerHandle};
pub use tiers::CompetitiveTier;
