//! Structural highlight regions
//!
//! Classifies the nesting of modules, types and functions in a syntax tree
//! into ordered regions an editor can paint as background tint, heading
//! bands and identifier emphasis. No semantic analysis is involved; the
//! classification is purely syntactic.
//!
//! ## Architecture
//!
//! ```text
//! source → ParserState::parse → Tree
//!        → walker::traverse (SyntaxNode) → Vec<RegionDescriptor>
//!        → renderer (Palette lookup per effective category + role)
//! ```

mod lines;
mod pass;
mod tree;
mod walker;

use serde::{Deserialize, Serialize};

pub use lines::LineIndex;
pub use pass::{StructureHighlights, StructurePass};
pub use tree::SyntaxNode;
pub use walker::{traverse, traverse_cancellable, CancelFlag};

/// The six construct kinds that define a coloring context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Enum,
    Struct,
    Trait,
    ImplBlock,
    Function,
    Module,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 6] = [
        Category::Enum,
        Category::Struct,
        Category::Trait,
        Category::ImplBlock,
        Category::Function,
        Category::Module,
    ];

    /// Display label (settings UI, CLI output)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Enum => "Enum",
            Category::Struct => "Struct",
            Category::Trait => "Trait",
            Category::ImplBlock => "Impl",
            Category::Function => "Function",
            Category::Module => "Module",
        }
    }
}

/// Why a region exists, independent of its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full extent of a construct (background tint)
    Block,
    /// Declaration of a construct that is top-level in its coloring context
    Header,
    /// Declaration of a function nested inside another colorable construct
    Subheader,
    /// The exact name token, or an impl block's type/trait reference
    Identifier,
}

/// How a region's extent is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Snap to the whole lines covering the offsets
    FullLine,
    /// Literal character span, no line snapping
    ExactRange,
}

impl RenderMode {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Block | Role::Header | Role::Subheader => RenderMode::FullLine,
            Role::Identifier => RenderMode::ExactRange,
        }
    }
}

/// A single annotated region produced by the walker
///
/// Offsets are byte offsets into the traversed source. Regions overlap
/// freely; emission order is paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegionDescriptor {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Category inherited from the nearest category-defining ancestor
    pub effective: Category,
    /// Category of the construct that produced this region
    pub declared: Category,
    pub role: Role,
    pub mode: RenderMode,
}

impl RegionDescriptor {
    /// Create a region, deriving the render mode from the role
    pub fn new(
        start: usize,
        end: usize,
        effective: Category,
        declared: Category,
        role: Role,
    ) -> Self {
        Self {
            start,
            end,
            effective,
            declared,
            role,
            mode: RenderMode::for_role(role),
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_follows_role() {
        assert_eq!(RenderMode::for_role(Role::Block), RenderMode::FullLine);
        assert_eq!(RenderMode::for_role(Role::Header), RenderMode::FullLine);
        assert_eq!(RenderMode::for_role(Role::Subheader), RenderMode::FullLine);
        assert_eq!(RenderMode::for_role(Role::Identifier), RenderMode::ExactRange);
    }

    #[test]
    fn test_region_equality_is_structural() {
        let nested = |effective| {
            RegionDescriptor::new(3, 7, effective, Category::Function, Role::Subheader)
        };
        let a = nested(Category::Struct);
        let b = nested(Category::Struct);
        let c = nested(Category::Function);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 4);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_len_of_inverted_region_is_zero() {
        let mut region =
            RegionDescriptor::new(3, 7, Category::Enum, Category::Enum, Role::Block);
        region.start = 9;
        assert_eq!(region.len(), 0);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Enum", "Struct", "Trait", "Impl", "Function", "Module"]
        );
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let yaml = serde_yaml::to_string(&Category::ImplBlock).unwrap();
        assert_eq!(yaml.trim(), "impl_block");
    }
}
