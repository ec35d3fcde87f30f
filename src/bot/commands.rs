use super::Context;
use crate::data_fetcher::api::build_summary;
use crate::data_fetcher::models::PlayerHandle;
use crate::error::AppError;
use crate::presenter::{MatchEmbed, build_match_embed, user_message};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

/// Show a Valorant player's last competitive match
#[poise::command(slash_command)]
pub async fn lastmatch(
    ctx: Context<'_>,
    #[description = "Their Riot in-game name (without # and tagline)"] game_name: String,
    #[description = "Their Riot ID tagline (e.g. 1234)"] tag_line: String,
) -> Result<(), AppError> {
    // Four Riot calls easily exceed the 3 second acknowledgement window
    ctx.defer().await?;
    info!("/lastmatch {}#{} by {}", game_name, tag_line, ctx.author().name);

    let data = ctx.data();
    let outcome = async {
        let handle = PlayerHandle::new(game_name, tag_line)?;
        build_summary(&data.http, &data.config, &handle).await
    }
    .await;

    match outcome {
        Ok(summary) => {
            let embed = to_discord_embed(&build_match_embed(&summary));
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
        }
        Err(e) => {
            error!("Last match lookup failed: {e}");
            ctx.say(user_message(&e)).await?;
        }
    }
    Ok(())
}

/// Converts the embed model into serenity's builder, stamped with the current time.
pub fn to_discord_embed(embed: &MatchEmbed) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .colour(embed.colour)
        .fields(
            embed
                .fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        )
        .footer(serenity::CreateEmbedFooter::new(&embed.footer))
        .timestamp(serenity::Timestamp::now())
}
