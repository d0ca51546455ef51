//! Structure pass: parse a document and compute its structural regions
//!
//! Every run parses from scratch and walks the fresh tree; nothing is
//! carried over between runs except the parser instances themselves.

use serde::Serialize;

use super::walker::{traverse, traverse_cancellable, CancelFlag};
use super::RegionDescriptor;
use crate::syntax::{LanguageId, ParserState};

/// Structural regions for one document revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureHighlights {
    /// Document revision these regions were computed from
    pub revision: u64,
    #[serde(skip)]
    pub language: LanguageId,
    /// Regions in paint order
    pub regions: Vec<RegionDescriptor>,
}

impl StructureHighlights {
    /// Create an empty result for a language
    pub fn new(language: LanguageId, revision: u64) -> Self {
        Self {
            revision,
            language,
            regions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Owns the parsers used to compute structure highlights (one per thread)
#[derive(Default)]
pub struct StructurePass {
    parser: ParserState,
}

impl StructurePass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` and collect its structural regions
    pub fn run(
        &mut self,
        source: &str,
        language: LanguageId,
        revision: u64,
    ) -> StructureHighlights {
        let Some(tree) = self.parser.parse(source, language) else {
            return StructureHighlights::new(language, revision);
        };

        let regions = traverse(tree.root_node());
        tracing::debug!(
            "Structure pass for {:?} rev {}: {} regions",
            language,
            revision,
            regions.len()
        );

        StructureHighlights {
            revision,
            language,
            regions,
        }
    }

    /// Like [`StructurePass::run`], but gives up with `None` once `cancel` is set
    pub fn run_cancellable(
        &mut self,
        source: &str,
        language: LanguageId,
        revision: u64,
        cancel: &CancelFlag,
    ) -> Option<StructureHighlights> {
        if cancel.is_cancelled() {
            return None;
        }

        let Some(tree) = self.parser.parse(source, language) else {
            return Some(StructureHighlights::new(language, revision));
        };

        let Some(regions) = traverse_cancellable(tree.root_node(), cancel) else {
            tracing::debug!(
                "Structure pass for {:?} rev {} cancelled",
                language,
                revision
            );
            return None;
        };

        Some(StructureHighlights {
            revision,
            language,
            regions,
        })
    }
}
