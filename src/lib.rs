//! Structured Highlights - structural code coloring
//!
//! This crate classifies module, type and function nesting in a syntax tree
//! into ordered regions an editor paints as background tint, heading bands
//! and identifier emphasis.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod structure;
pub mod syntax;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::HighlightSettings;
pub use structure::{
    traverse, traverse_cancellable, CancelFlag, Category, RegionDescriptor, RenderMode, Role,
    StructureHighlights, StructurePass, SyntaxNode,
};
pub use syntax::LanguageId;
pub use theme::{Color, Palette};
