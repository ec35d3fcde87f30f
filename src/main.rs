// src/main.rs
use clap::Parser;
use lastmatch_bot::bot;
use lastmatch_bot::cli::{Args, is_config_operation};
use lastmatch_bot::config::{Config, validation::validate_region};
use lastmatch_bot::data_fetcher::api::{build_summary, create_riot_client};
use lastmatch_bot::data_fetcher::models::PlayerHandle;
use lastmatch_bot::error::AppError;
use lastmatch_bot::logging::setup_logging;
use lastmatch_bot::presenter::{build_match_embed, render_embed, render_message, user_message};
use std::io::stdout;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // A missing .env is fine; the environment or config file may carry everything
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config_log_path = Config::load_unvalidated()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args, config_log_path.as_deref()).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_operation(&args) {
        return update_config_file(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if let Some(riot_id) = args.lookup.as_deref() {
        return run_lookup(&config, riot_id).await;
    }

    bot::run(config).await
}

/// Applies `--set-region`, `--set-log-file` and `--clear-log-file` to the
/// config file. Only file values are written back, never environment secrets.
async fn update_config_file(args: Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_file_or_default(&config_path).await?;

    if let Some(region) = args.new_region {
        let region = region.trim().to_lowercase();
        validate_region(&region)?;
        config.region = region;
    }

    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save_to_path(&config_path).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// One-shot terminal lookup. Failures are printed the same way the bot
/// replies to them; the details go to the log file.
async fn run_lookup(config: &Config, riot_id: &str) -> Result<(), AppError> {
    let outcome = async {
        let handle: PlayerHandle = riot_id.parse()?;
        let client = create_riot_client(config)?;
        build_summary(&client, config, &handle).await
    }
    .await;

    let mut stdout = stdout();
    match outcome {
        Ok(summary) => render_embed(&mut stdout, &build_match_embed(&summary)),
        Err(e) => {
            error!("Lookup of {riot_id} failed: {e}");
            render_message(&mut stdout, &user_message(&e))
        }
    }
}
