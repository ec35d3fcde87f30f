//! Turns a match summary, or the reason there is none, into something a user sees.
//!
//! [`embed`] builds the platform-neutral message model used by the bot,
//! [`messages`] maps errors to the short replies users get and
//! [`terminal`] prints either of them for the one-shot lookup mode.

pub mod embed;
pub mod messages;
pub mod terminal;

pub use embed::{EmbedField, MatchEmbed, build_match_embed, format_stat_name, format_stat_value};
pub use messages::user_message;
pub use terminal::{render_embed, render_message};
