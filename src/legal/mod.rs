pub mod mock;
pub mod types;

use types::KnowledgeRecord;

/// Legal codes known to the local fallback, in match-priority order.
pub static KNOWLEDGE_BASE: [KnowledgeRecord; 4] = [
    KnowledgeRecord {
        id: "codigo_trabajo",
        name: "Código de Trabajo",
        article: "Art. 213 - Licencias y fuero",
        keywords: &[
            "trabajo", "laboral", "empleador", "empleado", "licencia", "fuero", "despido",
        ],
        summary: "El empleador debe respetar licencias por maternidad/paternidad, garantizar condiciones dignas y no afectar el fuero de maternidad sin autorización judicial.",
    },
    KnowledgeRecord {
        id: "codigo_familia",
        name: "Código de la Familia",
        article: "Art. 256-260 - Adopción y tutela",
        keywords: &["familia", "adopcion", "adopción", "matrimonio", "guarda", "menor"],
        summary: "Define requisitos de idoneidad, consentimiento del menor cuando aplique y control judicial para formalizar adopciones y tutelas.",
    },
    KnowledgeRecord {
        id: "codigo_penal",
        name: "Código Penal",
        article: "Art. 214 - Hurto",
        keywords: &["penal", "delito", "hurto", "robo", "pena", "sancion", "sanción"],
        summary: "El hurto simple se sanciona con pena de prisión graduada según el monto. Circunstancias agravantes elevan la pena.",
    },
    KnowledgeRecord {
        id: "codigo_civil",
        name: "Código Civil",
        article: "Art. 1644 - Responsabilidad",
        keywords: &[
            "civil", "contrato", "responsabilidad", "obligacion", "obligación", "daños", "perjuicios",
        ],
        summary: "Regula la obligación de reparar daños causados por dolo o culpa, con énfasis en restitución e indemnización.",
    },
];

/// Find the legal code a question is about.
///
/// First record (in declaration order) with any keyword contained in the
/// lower-cased question wins. No scoring.
pub fn detect_context(question: &str) -> Option<&'static KnowledgeRecord> {
    let lower = question.to_lowercase();
    KNOWLEDGE_BASE
        .iter()
        .find(|record| record.keywords.iter().any(|k| lower.contains(k)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_and_keywords_lowercase() {
        let ids: HashSet<&str> = KNOWLEDGE_BASE.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), KNOWLEDGE_BASE.len());

        for record in &KNOWLEDGE_BASE {
            assert!(!record.keywords.is_empty(), "{} has no keywords", record.id);
            for k in record.keywords {
                assert_eq!(*k, k.to_lowercase(), "keyword {:?} not lowercase", k);
            }
        }
    }

    #[test]
    fn test_detect_single_match() {
        assert_eq!(
            detect_context("¿Qué dice el código penal sobre el hurto?").map(|r| r.id),
            Some("codigo_penal")
        );
        assert_eq!(
            detect_context("Requisitos para la adopción de un niño").map(|r| r.id),
            Some("codigo_familia")
        );
        assert_eq!(
            detect_context("responsabilidad por daños en la vía").map(|r| r.id),
            Some("codigo_civil")
        );
        assert_eq!(
            detect_context("¿Me pueden dar licencia?").map(|r| r.id),
            Some("codigo_trabajo")
        );
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(
            detect_context("EL DELITO DE ROBO").map(|r| r.id),
            Some("codigo_penal")
        );
        // Non-ASCII keywords lower-case too
        assert_eq!(
            detect_context("OBLIGACIÓN DE PAGO").map(|r| r.id),
            Some("codigo_civil")
        );
    }

    #[test]
    fn test_detect_prefers_declaration_order() {
        // "despido" (trabajo) and "hurto" (penal): trabajo is declared first
        assert_eq!(
            detect_context("despido por hurto").map(|r| r.id),
            Some("codigo_trabajo")
        );
        // "matrimonio" (familia) and "contrato" (civil)
        assert_eq!(
            detect_context("contrato de matrimonio").map(|r| r.id),
            Some("codigo_familia")
        );
    }

    #[test]
    fn test_detect_no_match() {
        assert!(detect_context("hola").is_none());
        assert!(detect_context("").is_none());
        assert!(detect_context("¿Cuál es la capital de Panamá?").is_none());
    }
}
