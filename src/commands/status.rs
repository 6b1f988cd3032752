use crate::legal::KNOWLEDGE_BASE;
use crate::state::Context;
use crate::view::render_backend_status;

/// Show whether the backend is up and the local fallback codes
#[poise::command(slash_command, guild_only)]
pub async fn status(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    // The health check has no timeout; acknowledge first
    ctx.defer().await?;

    let backend = ctx.data().resolver.backend();
    let health = match backend {
        Some(client) => client.health().await,
        None => None,
    };
    let mut output = render_backend_status(backend.map(|b| b.url()), health.as_ref());

    output.push_str("\n**Códigos de respaldo:**\n");
    for record in &KNOWLEDGE_BASE {
        output.push_str(&format!(
            "- {} ({}) | palabras clave: {}\n",
            record.name,
            record.article,
            record.keywords.join(", ")
        ));
    }

    ctx.say(output).await?;
    Ok(())
}
