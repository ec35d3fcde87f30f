use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application runs once and exits instead of serving Discord.
/// That is the case for a terminal lookup and for every config operation.
pub fn is_one_shot_mode(args: &Args) -> bool {
    args.lookup.is_some() || is_config_operation(args)
}

/// True when the arguments ask to show or edit the config file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_region.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Valorant last-match bot
///
/// Runs a Discord bot with a `/lastmatch` slash command that shows a player's
/// most recent competitive match: result, map, start time, current rank and
/// their stat line.
///
/// Credentials come from the config file, a `.env` file or the environment
/// (`RIOT_API_KEY`, `RIOT_REGION`, `DISCORD_TOKEN`, `GUILD_ID`).
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Look up one player's last competitive match, print it and exit.
    /// Discord credentials are not needed in this mode.
    #[arg(
        long = "lookup",
        short = 'L',
        value_name = "NAME#TAG",
        help_heading = "Lookup"
    )]
    pub lookup: Option<String>,

    /// Update the routing region in config (e.g. americas, europe, asia).
    #[arg(long = "set-region", value_name = "REGION", help_heading = "Configuration")]
    pub new_region: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print logs to the terminal in lookup mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
