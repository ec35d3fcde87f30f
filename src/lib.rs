//! Valorant last-match lookup library
//!
//! Resolves a Riot ID, fetches the player's most recent competitive match and
//! current rank from the Riot Games API, and turns the result into a Discord
//! embed or terminal output.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lastmatch_bot::data_fetcher::api::{build_summary, create_riot_client};
//! use lastmatch_bot::presenter::{build_match_embed, render_embed};
//! use lastmatch_bot::{AppError, Config, PlayerHandle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_riot_client(&config)?;
//!
//!     let handle = PlayerHandle::new("Alice", "1234")?;
//!     let summary = build_summary(&client, &config, &handle).await?;
//!
//!     let mut stdout = std::io::stdout();
//!     render_embed(&mut stdout, &build_match_embed(&summary))?;
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::build_summary;
pub use data_fetcher::models::{MatchSummary, PlayerHandle};
pub use data_fetcher::tiers::CompetitiveTier;
pub use error::AppError;
pub use presenter::{MatchEmbed, build_match_embed, user_message};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
