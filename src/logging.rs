use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directive applied on top of `RUST_LOG`
const DEFAULT_DIRECTIVE: &str = "lastmatch_bot=info";

/// Splits a log file path into directory and file name.
/// Without a custom path the default log directory and file name are used.
pub fn resolve_log_location(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Whether logs are mirrored to stdout: always for the bot, only with
/// `--debug` for one-shot runs so their output stays clean.
pub fn logs_to_stdout(args: &Args) -> bool {
    !crate::cli::is_one_shot_mode(args) || args.debug
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive: Directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging configuration for the application.
///
/// - Bot mode and `--debug`: logs to both stdout and file
/// - Lookup and config operations: logs only to file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// `--log-file` wins over the config file's `log_file_path`.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config_log_path: Option<&str>,
) -> Result<(String, WorkerGuard), AppError> {
    let custom_log_path = args.log_file.as_deref().or(config_log_path);
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    let installed = if logs_to_stdout(args) {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    installed
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_custom_log_location() {
        let (dir, file) = resolve_log_location(Some("/var/log/lastmatch/bot.log"));
        assert_eq!(dir, "/var/log/lastmatch");
        assert_eq!(file, "bot.log");
    }

    #[test]
    fn test_bare_file_name_goes_to_current_dir() {
        let (dir, file) = resolve_log_location(Some("bot.log"));
        assert_eq!(dir, ".");
        assert_eq!(file, "bot.log");
    }

    #[test]
    fn test_default_log_location() {
        let (dir, file) = resolve_log_location(None);
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, LOG_FILE_NAME);
    }

    #[test]
    fn test_stdout_only_for_bot_or_debug() {
        let bot = Args::try_parse_from(["lastmatch_bot"]).unwrap();
        assert!(logs_to_stdout(&bot));

        let lookup = Args::try_parse_from(["lastmatch_bot", "-L", "Alice#1234"]).unwrap();
        assert!(!logs_to_stdout(&lookup));

        let debug =
            Args::try_parse_from(["lastmatch_bot", "-L", "Alice#1234", "--debug"]).unwrap();
        assert!(logs_to_stdout(&debug));
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(env_filter().is_ok());
    }
}
