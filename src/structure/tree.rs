//! Syntax tree boundary for the structure walker
//!
//! The walker only needs to discriminate construct kinds, enumerate children
//! and find a construct's name (or an impl block's type/trait reference).
//! `tree_sitter::Node` implements this directly; tests use an in-memory tree.

use tree_sitter::Node;

use super::Category;

/// Capabilities the structure walker requires from a syntax tree node
pub trait SyntaxNode: Sized {
    /// The construct category of this node, or `None` for any other kind
    fn category(&self) -> Option<Category>;

    /// Child nodes in document order
    fn children(&self) -> Vec<Self>;

    /// Name token of a struct/enum/trait/function/module
    fn name(&self) -> Option<Self>;

    /// Target type reference of an impl block
    fn impl_type(&self) -> Option<Self>;

    /// Trait reference of a trait impl block
    fn impl_trait(&self) -> Option<Self>;

    fn start_offset(&self) -> usize;

    fn end_offset(&self) -> usize;

    /// Start of the construct's block, including leading attributes and
    /// outer doc comments attached to it
    fn block_start(&self) -> usize {
        self.start_offset()
    }
}

/// Map a tree-sitter-rust node kind to its construct category
fn rust_category(kind: &str) -> Option<Category> {
    match kind {
        "struct_item" | "union_item" => Some(Category::Struct),
        "enum_item" => Some(Category::Enum),
        "trait_item" => Some(Category::Trait),
        "impl_item" => Some(Category::ImplBlock),
        "function_item" | "function_signature_item" => Some(Category::Function),
        "mod_item" => Some(Category::Module),
        _ => None,
    }
}

// Error recovery inserts zero-width "missing" nodes; treat them as absent.
fn present_field<'tree>(node: &Node<'tree>, field: &str) -> Option<Node<'tree>> {
    node.child_by_field_name(field)
        .filter(|child| !child.is_missing())
}

/// `#[..]` attributes and `///` or `/** */` doc comments belong to the item after them
fn is_item_prefix(node: &Node) -> bool {
    match node.kind() {
        "attribute_item" => true,
        "line_comment" | "block_comment" => {
            let mut cursor = node.walk();
            let is_outer_doc = node
                .children(&mut cursor)
                .any(|child| child.kind() == "outer_doc_comment_marker");
            is_outer_doc
        }
        _ => false,
    }
}

impl<'tree> SyntaxNode for Node<'tree> {
    fn category(&self) -> Option<Category> {
        // `mod foo;` only declares a file module; there is nothing to color
        if self.kind() == "mod_item" && self.child_by_field_name("body").is_none() {
            return None;
        }
        rust_category(self.kind())
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        Node::children(self, &mut cursor).collect()
    }

    fn name(&self) -> Option<Self> {
        present_field(self, "name")
    }

    fn impl_type(&self) -> Option<Self> {
        present_field(self, "type")
    }

    fn impl_trait(&self) -> Option<Self> {
        present_field(self, "trait")
    }

    fn start_offset(&self) -> usize {
        self.start_byte()
    }

    fn end_offset(&self) -> usize {
        self.end_byte()
    }

    fn block_start(&self) -> usize {
        let mut start = self.start_byte();
        let mut prev = self.prev_sibling();
        while let Some(node) = prev.filter(is_item_prefix) {
            start = node.start_byte();
            prev = node.prev_sibling();
        }
        start
    }
}
