//! Local rule-based answers used when the backend cannot be reached.

use super::detect_context;
use super::types::{AnswerResult, Citation};

const DATASET_JSON_DIR: &str = "Dataset/JSON";

const FALLBACK_CODE: &str = "Constitución de Panamá";
const FALLBACK_ARTICLE: &str = "Referencia general";
const FALLBACK_DOCUMENT: &str = "Dataset/Constitucion/constitucion_panama.pdf";

const NO_MATCH_TEXT: &str = "No se encontró un fragmento directo para tu consulta, pero puedo indicarte que las respuestas siempre se limitan a los códigos cargados. Reformula con el código o artículo si lo conoces.";

const STRICT_MATCH_NOTE: &str = "Modo estricto: respuesta basada solo en el fragmento recuperado.";
const FLEXIBLE_MATCH_NOTE: &str = "Modo flexible: se permite resumir en lenguaje claro.";
const STRICT_NO_MATCH_NOTE: &str = "Sin evidencia suficiente → devuelvo control al usuario.";
const FLEXIBLE_NO_MATCH_NOTE: &str = "Activa Modo estricto para forzar solo evidencias.";

/// Build a templated answer from the static knowledge base.
///
/// Pure: same inputs always give the same output.
pub fn build_mock_answer(question: &str, strict: bool, want_citations: bool) -> AnswerResult {
    let (text, candidate) = match detect_context(question) {
        Some(record) => {
            let note = if strict {
                STRICT_MATCH_NOTE
            } else {
                FLEXIBLE_MATCH_NOTE
            };
            let text = format!(
                "Resumen rápido sobre {}:\n\n- {}\n- La cita relevante: {}.\n\n{}",
                record.name, record.summary, record.article, note
            );
            let document = format!("{}/{}.json", DATASET_JSON_DIR, record.id);
            (text, Citation::new(record.name, record.article, &document))
        }
        None => {
            let note = if strict {
                STRICT_NO_MATCH_NOTE
            } else {
                FLEXIBLE_NO_MATCH_NOTE
            };
            let text = format!("{}\n\n{}", NO_MATCH_TEXT, note);
            (
                text,
                Citation::new(FALLBACK_CODE, FALLBACK_ARTICLE, FALLBACK_DOCUMENT),
            )
        }
    };

    let citations = if want_citations {
        vec![candidate]
    } else {
        Vec::new()
    };

    AnswerResult { text, citations }
}
