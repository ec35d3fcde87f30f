//! Discord surface: poise framework bootstrap and the slash command.

pub mod commands;

use crate::config::Config;
use crate::data_fetcher::api::create_riot_client;
use crate::error::AppError;
use crate::presenter::user_message;
use poise::serenity_prelude as serenity;
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// State shared by every command invocation. Read-only after startup.
pub struct Data {
    pub config: Config,
    /// Riot API client; clones share one connection pool
    pub http: reqwest::Client,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

/// Holds the error that ended startup after the gateway was already up.
///
/// Only the first recorded error is kept.
#[derive(Clone, Default)]
struct StartupFailure(Arc<Mutex<Option<AppError>>>);

impl StartupFailure {
    fn record(&self, error: AppError) {
        if let Ok(mut slot) = self.0.lock() {
            slot.get_or_insert(error);
        }
    }

    fn into_result(self) -> Result<(), AppError> {
        let failure = match self.0.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Connects to Discord, registers the commands in the configured guild and
/// serves interactions until the gateway connection ends.
///
/// # Errors
/// * `AppError::Config` - Missing or invalid Discord or Riot settings
/// * `AppError::Discord` - Login, registration or gateway failure
pub async fn run(config: Config) -> Result<(), AppError> {
    config.validate_for_bot()?;
    let (Some(token), Some(guild_id)) = (config.discord_token.clone(), config.guild_id) else {
        return Err(AppError::config_error(
            "Discord token and guild id are required to run the bot",
        ));
    };

    let http = create_riot_client(&config)?;
    info!(
        "Starting bot for region {} against {}",
        config.region,
        config.api_base_url()
    );

    let startup_failure = StartupFailure::default();
    let setup_failure = startup_failure.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::lastmatch()],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {} (ID: {})", ready.user.name, ready.user.id);
                if let Err(e) = poise::builtins::register_in_guild(
                    ctx,
                    &framework.options().commands,
                    serenity::GuildId::new(guild_id),
                )
                .await
                {
                    // Without registered commands the bot cannot serve anything
                    error!("Command registration in guild {guild_id} failed: {e}");
                    framework.shard_manager().shutdown_all().await;
                    setup_failure.record(AppError::Discord(e));
                    return Err(AppError::config_error(format!(
                        "Command registration in guild {guild_id} failed"
                    )));
                }
                info!(
                    "Registered {} command(s) in guild {}",
                    framework.options().commands.len(),
                    guild_id
                );
                Ok(Data { config, http })
            })
        })
        .build();

    let mut client =
        serenity::ClientBuilder::new(token, serenity::GatewayIntents::non_privileged())
            .framework(framework)
            .await?;
    client.start().await?;
    startup_failure.into_result()
}

async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Bot setup failed: {error}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {}", ctx.command().name, error);
            if let Err(e) = ctx.say(user_message(&error)).await {
                error!("Failed to report command error: {e}");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}
