//! Tree-sitter parser state
//!
//! Owns one parser per supported language. Every parse is a full parse;
//! trees are handed to the caller and not cached.

use std::collections::HashMap;

use tree_sitter::{Language, Parser, Tree};

use super::languages::LanguageId;

/// Thread-local parser state (tree-sitter parsers are !Sync)
pub struct ParserState {
    /// Parser instances per language
    parsers: HashMap<LanguageId, Parser>,
}

impl ParserState {
    /// Create a new parser state with initialized languages
    pub fn new() -> Self {
        let mut state = Self {
            parsers: HashMap::new(),
        };
        state.init_language(LanguageId::Rust);
        state
    }

    /// Initialize a language's parser
    fn init_language(&mut self, lang: LanguageId) {
        let ts_lang: Language = match lang {
            LanguageId::Rust => tree_sitter_rust::LANGUAGE.into(),
            // No parser for plain text
            LanguageId::PlainText => return,
        };

        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&ts_lang) {
            tracing::error!("Failed to set language for {:?}: {}", lang, e);
            return;
        }
        self.parsers.insert(lang, parser);
    }

    /// Parse a full document. Returns `None` for plain text or if parsing fails.
    pub fn parse(&mut self, source: &str, language: LanguageId) -> Option<Tree> {
        if language == LanguageId::PlainText {
            return None;
        }

        let Some(parser) = self.parsers.get_mut(&language) else {
            tracing::warn!("No parser for language {:?}", language);
            return None;
        };

        tracing::trace!("Parsing {} bytes as {:?}", source.len(), language);
        let tree = parser.parse(source, None);
        if tree.is_none() {
            tracing::error!("Parse failed for {:?}", language);
        }
        tree
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}
