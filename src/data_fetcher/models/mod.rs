pub mod account;
pub mod match_detail;
pub mod matchlist;
pub mod ranked;
pub mod summary;

pub use account::{AccountResponse, PlayerHandle, PlayerId};
pub use match_detail::{MatchMetadata, MatchParticipant, MatchPlayers, MatchRecord, StatLine};
pub use matchlist::{MatchId, MatchlistEntry, MatchlistResponse};
pub use ranked::RankedResponse;
pub use summary::MatchSummary;
