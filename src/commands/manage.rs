use crate::state::Context;
use crate::view::{greeting, render_answer};

/// Start the conversation over
#[poise::command(slash_command, guild_only)]
pub async fn reset(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    ctx.say(render_answer(&greeting())).await?;
    Ok(())
}
