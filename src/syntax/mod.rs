//! Syntax tree module
//!
//! Provides tree-sitter based parsing with:
//! - Language detection from file extensions
//! - Full (non-incremental) parses handed to the structure walker
//!
//! ## Supported Languages
//!
//! - Rust

mod languages;
mod parser;

pub use languages::LanguageId;
pub use parser::ParserState;
