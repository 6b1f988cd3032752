use poise::CreateReply;
use tracing::debug;

use crate::drawer::DrawerKind;
use crate::state::Context;

/// Open a side panel (info or menu)
#[poise::command(slash_command, guild_only)]
pub async fn panel(
    ctx: Context<'_>,
    #[description = "info | menu"]
    #[autocomplete = "autocomplete_drawer"]
    name: String,
) -> Result<(), anyhow::Error> {
    let user_id = ctx.author().id.get();

    let opened = {
        let mut drawers = ctx.data().drawers.write().await;
        drawers.open(user_id, &name)
    };

    let content = match opened {
        Some(kind) => {
            debug!(user_id, drawer = kind.name(), "drawer opened");
            kind.content().to_string()
        }
        None => format!("Panel desconocido `{}`. Opciones: `info`, `menu`.", name),
    };

    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Close every open side panel
#[poise::command(slash_command, guild_only)]
pub async fn close(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let user_id = ctx.author().id.get();

    let closed: Vec<&str> = {
        let mut drawers = ctx.data().drawers.write().await;
        let closed = drawers.close(user_id);
        debug!(user_id, tracked = drawers.tracked_users(), "drawers closed");
        closed.into_iter().map(DrawerKind::name).collect()
    };

    let content = if closed.is_empty() {
        "No hay paneles abiertos.".to_string()
    } else {
        format!("Paneles cerrados: {}", closed.join(", "))
    };

    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

async fn autocomplete_drawer(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    DrawerKind::ALL
        .iter()
        .map(|kind| kind.name())
        .filter(|name| name.starts_with(&partial.to_lowercase()))
        .map(str::to_string)
        .collect()
}
