mod ask;
mod manage;
mod panel;
mod status;

use crate::state::Context;

/// LegalBot Panamá - consultas sobre los códigos legales de Panamá
#[poise::command(
    slash_command,
    subcommands(
        "ask::ask",
        "manage::reset",
        "panel::panel",
        "panel::close",
        "status::status"
    )
)]
pub async fn legal(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}
