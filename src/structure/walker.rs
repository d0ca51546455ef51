//! Structure walker
//!
//! Depth-first traversal that turns recognized constructs into region
//! descriptors. The only context carried between levels is the effective
//! category in force from an ancestor, passed down as a parameter, so every
//! call starts clean and concurrent traversals share nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::tree::SyntaxNode;
use super::{Category, RegionDescriptor, Role};

/// Cooperative cancellation signal shared between a caller and a traversal
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of any traversal observing this flag
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Walk `root` and return every structural region in document order
pub fn traverse<N: SyntaxNode>(root: N) -> Vec<RegionDescriptor> {
    let mut walker = Walker::default();
    walker.visit(&root, None);
    walker.regions
}

/// Like [`traverse`], but checks `cancel` before each top-level item.
///
/// Returns `None` if cancellation was observed at any point, never a
/// partial region list.
pub fn traverse_cancellable<N: SyntaxNode>(
    root: N,
    cancel: &CancelFlag,
) -> Option<Vec<RegionDescriptor>> {
    let mut walker = Walker::default();

    if root.category().is_some() {
        if cancel.is_cancelled() {
            return None;
        }
        walker.visit(&root, None);
    } else {
        for item in root.children() {
            if cancel.is_cancelled() {
                tracing::debug!(
                    "Structure traversal cancelled after {} regions",
                    walker.regions.len()
                );
                return None;
            }
            walker.visit(&item, None);
        }
    }

    if cancel.is_cancelled() {
        return None;
    }
    Some(walker.regions)
}

#[derive(Default)]
struct Walker {
    regions: Vec<RegionDescriptor>,
}

impl Walker {
    /// Visit `node` with `inherited` as the category in force from ancestors
    fn visit<N: SyntaxNode>(&mut self, node: &N, inherited: Option<Category>) {
        let for_children = match node.category() {
            Some(Category::Module) => {
                // A module blends into its surroundings but is transparent for
                // inheritance: children see what was in force before it.
                let display = inherited.unwrap_or(Category::Module);
                self.emit_named(node, display, Category::Module, Role::Header);
                inherited
            }
            Some(Category::ImplBlock) => {
                let effective = inherited.unwrap_or(Category::ImplBlock);
                self.emit_impl(node, effective);
                Some(effective)
            }
            Some(Category::Function) => {
                let effective = inherited.unwrap_or(Category::Function);
                let role = if inherited.is_none() {
                    Role::Header
                } else {
                    Role::Subheader
                };
                self.emit_named(node, effective, Category::Function, role);
                Some(effective)
            }
            Some(declared) => {
                let effective = inherited.unwrap_or(declared);
                self.emit_named(node, effective, declared, Role::Header);
                Some(effective)
            }
            None => inherited,
        };

        for child in node.children() {
            self.visit(&child, for_children);
        }
    }

    fn push<N: SyntaxNode>(
        &mut self,
        node: &N,
        effective: Category,
        declared: Category,
        role: Role,
    ) {
        self.regions.push(RegionDescriptor::new(
            node.start_offset(),
            node.end_offset(),
            effective,
            declared,
            role,
        ));
    }

    /// Block over the item and the attributes and doc comments leading it
    fn push_block<N: SyntaxNode>(&mut self, node: &N, effective: Category, declared: Category) {
        self.regions.push(RegionDescriptor::new(
            node.block_start(),
            node.end_offset(),
            effective,
            declared,
            Role::Block,
        ));
    }

    /// Block over the item, then heading and identifier over its name if any
    fn emit_named<N: SyntaxNode>(
        &mut self,
        node: &N,
        effective: Category,
        declared: Category,
        heading: Role,
    ) {
        self.push_block(node, effective, declared);
        if let Some(name) = node.name() {
            self.push(&name, effective, declared, heading);
            self.push(&name, effective, declared, Role::Identifier);
        }
    }

    /// Impl blocks head on the target type; the trait only gets an identifier
    fn emit_impl<N: SyntaxNode>(&mut self, node: &N, effective: Category) {
        let declared = Category::ImplBlock;
        self.push_block(node, effective, declared);
        if let Some(ty) = node.impl_type() {
            self.push(&ty, effective, declared, Role::Header);
            self.push(&ty, effective, declared, Role::Identifier);
        }
        if let Some(tr) = node.impl_trait() {
            self.push(&tr, effective, declared, Role::Identifier);
        }
    }
}
