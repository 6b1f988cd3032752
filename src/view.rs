//! Discord rendering of chat messages.

use crate::backend::BackendHealth;
use crate::legal::types::{AnswerResult, Citation};

/// Discord rejects messages over 2000 chars; leave headroom.
pub const MAX_CHUNK: usize = 1990;

pub const LOADING_TEXT: &str = "⏳ Buscando artículos relevantes y generando respuesta...";

const GREETING_TEXT: &str = "Hola, soy LegalBot Panamá. Pregunta sobre un artículo específico o describe tu caso y te devolveré una respuesta breve con la cita legal correspondiente.";

/// Suggested questions offered as autocomplete for `/legal ask`.
pub const QUICK_PROMPTS: &[&str] = &[
    "¿Qué dice el código penal sobre el hurto?",
    "¿Qué licencias protege el Código de Trabajo?",
    "¿Qué requisitos pide el Código de la Familia para una adopción?",
    "¿Quién responde por daños y perjuicios según el Código Civil?",
];

/// Opening message posted when a conversation starts or is reset.
pub fn greeting() -> AnswerResult {
    AnswerResult {
        text: GREETING_TEXT.to_string(),
        citations: vec![Citation::new(
            "Dataset RAG SIC 2025",
            "Embeddings FAISS",
            "Dataset/FAISS/*",
        )],
    }
}

pub fn render_question(user_mention: &str, question: &str) -> String {
    format!("{} **preguntó:** {}", user_mention, question)
}

/// Answer text followed by one pill per citation. Newlines are kept as line breaks.
pub fn render_answer(answer: &AnswerResult) -> String {
    let mut out = answer.text.clone();

    if !answer.citations.is_empty() {
        out.push_str("\n\n**Fuentes:**\n");
        for c in &answer.citations {
            out.push_str(&format!("- `{} • {} • {}`\n", c.code, c.article, c.document));
        }
    }

    out
}

/// Split into Discord-safe chunks, preferring newline then space boundaries.
///
/// A space inside a backtick citation pill is never used as a split point.
/// Whitespace-only pieces are dropped since Discord rejects empty messages.
pub fn split_chunks(text: &str, max: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let split_at = if remaining.len() <= max {
            remaining.len()
        } else {
            let mut limit = max;
            while !remaining.is_char_boundary(limit) {
                limit -= 1;
            }
            if limit == 0 {
                limit = remaining.chars().next().map_or(1, char::len_utf8);
            }
            split_point(&remaining[..limit]).unwrap_or(limit)
        };

        let chunk = &remaining[..split_at];
        if !chunk.trim().is_empty() {
            chunks.push(chunk);
        }
        remaining = &remaining[split_at..];
    }

    chunks
}

fn split_point(head: &str) -> Option<usize> {
    if let Some(i) = head.rfind('\n') {
        return Some(i + 1);
    }
    head.char_indices()
        .filter(|(_, c)| *c == ' ')
        .map(|(i, _)| i)
        .rev()
        .find(|&i| head[..i].matches('`').count() % 2 == 0)
        .map(|i| i + 1)
}

/// Backend line for `/legal status`.
pub fn render_backend_status(url: Option<&str>, health: Option<&BackendHealth>) -> String {
    match (url, health) {
        (None, _) => "**Backend:** desactivado (`LEGALBOT_API_URL` vacío). \
                      Todas las respuestas son simuladas.\n"
            .to_string(),
        (Some(url), None) => format!(
            "**Backend:** `{}` no responde. Se usará la respuesta simulada.\n",
            url
        ),
        (Some(url), Some(health)) => {
            let indexes = if health.indexes.is_empty() {
                "ninguno".to_string()
            } else {
                health.indexes.join(", ")
            };
            format!(
                "**Backend:** `{}` disponible (estado `{}`)\n**Índices:** {}\n",
                url, health.status, indexes
            )
        }
    }
}
