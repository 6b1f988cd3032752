use serde::{Deserialize, Serialize};

/// A legal code entry in the static knowledge base.
#[derive(Debug, PartialEq, Eq)]
pub struct KnowledgeRecord {
    pub id: &'static str,
    pub name: &'static str,
    /// e.g. "Art. 214 - Hurto"
    pub article: &'static str,
    /// Lowercase fragments matched as substrings of the question.
    pub keywords: &'static [&'static str],
    pub summary: &'static str,
}

/// A structured reference shown alongside an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub code: String,
    pub article: String,
    /// Logical path of the backing document. Never dereferenced.
    pub document: String,
}

impl Citation {
    pub fn new(code: &str, article: &str, document: &str) -> Self {
        Self {
            code: code.to_string(),
            article: article.to_string(),
            document: document.to_string(),
        }
    }
}

/// Final answer handed to the chat view for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub text: String,
    pub citations: Vec<Citation>,
}

/// User toggles, read once per submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFlags {
    pub strict: bool,
    pub want_citations: bool,
}

impl Default for RequestFlags {
    fn default() -> Self {
        Self {
            strict: true,
            want_citations: true,
        }
    }
}
