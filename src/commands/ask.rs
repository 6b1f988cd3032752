use poise::CreateReply;
use tracing::info;

use crate::legal::types::RequestFlags;
use crate::resolver::FALLBACK_TEXT;
use crate::state::Context;
use crate::view::{render_answer, render_question, split_chunks, LOADING_TEXT, MAX_CHUNK, QUICK_PROMPTS};

/// Ask a legal question
#[poise::command(slash_command, guild_only)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Tu pregunta"]
    #[autocomplete = "autocomplete_prompt"]
    question: String,
    #[description = "Modo estricto: solo evidencia recuperada (por defecto: sí)"] strict: Option<bool>,
    #[description = "Incluir citas legales (por defecto: sí)"] citations: Option<bool>,
) -> Result<(), anyhow::Error> {
    let question = question.trim();
    if question.is_empty() {
        ctx.send(
            CreateReply::default()
                .content("Escribe una pregunta.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    // Toggles are read per question, never remembered
    let defaults = RequestFlags::default();
    let strict = strict.unwrap_or(defaults.strict);
    let want_citations = citations.unwrap_or(defaults.want_citations);

    let user_mention = format!("<@{}>", ctx.author().id);
    let echo = render_question(&user_mention, question);
    for chunk in split_chunks(&echo, MAX_CHUNK) {
        ctx.say(chunk).await?;
    }
    let placeholder = ctx.say(LOADING_TEXT).await?;

    info!(
        user = ctx.author().name,
        question, strict, want_citations, "question received"
    );

    let answer = ctx
        .data()
        .resolver
        .resolve(question, strict, want_citations)
        .await;

    info!(
        answer_len = answer.text.len(),
        citations = answer.citations.len(),
        "answer ready"
    );

    // The first chunk replaces the placeholder, the rest follow it
    let rendered = render_answer(&answer);
    let mut chunks = split_chunks(&rendered, MAX_CHUNK).into_iter();
    let first = chunks.next().unwrap_or(FALLBACK_TEXT);
    placeholder
        .edit(ctx, CreateReply::default().content(first))
        .await?;

    for chunk in chunks {
        ctx.say(chunk).await?;
    }

    Ok(())
}

/// Autocomplete with the suggested quick prompts.
async fn autocomplete_prompt(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    QUICK_PROMPTS
        .iter()
        .filter(|p| p.to_lowercase().contains(&partial))
        .map(|p| p.to_string())
        .collect()
}
