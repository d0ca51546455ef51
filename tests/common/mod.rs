//! Shared test helpers for integration tests
//!
//! Provides an in-memory syntax tree so structure tests can nest constructs
//! freely (a module inside a struct, an impl inside a struct) regardless of
//! what the Rust grammar allows.
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use structured_highlights::{Category, RegionDescriptor, Role, SyntaxNode};

/// In-memory syntax node with offsets into a generated source text
#[derive(Debug, Clone, PartialEq)]
pub struct TestNode {
    pub category: Option<Category>,
    pub start: usize,
    pub end: usize,
    pub name: Option<Box<TestNode>>,
    pub impl_type: Option<Box<TestNode>>,
    pub impl_trait: Option<Box<TestNode>>,
    pub children: Vec<TestNode>,
}

impl TestNode {
    fn leaf(start: usize, end: usize) -> Self {
        Self {
            category: None,
            start,
            end,
            name: None,
            impl_type: None,
            impl_trait: None,
            children: Vec::new(),
        }
    }
}

impl SyntaxNode for TestNode {
    fn category(&self) -> Option<Category> {
        self.category
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }

    fn name(&self) -> Option<Self> {
        self.name.as_deref().cloned()
    }

    fn impl_type(&self) -> Option<Self> {
        self.impl_type.as_deref().cloned()
    }

    fn impl_trait(&self) -> Option<Self> {
        self.impl_trait.as_deref().cloned()
    }

    fn start_offset(&self) -> usize {
        self.start
    }

    fn end_offset(&self) -> usize {
        self.end
    }
}

/// Shape of a tree to build
#[derive(Debug, Clone)]
pub enum Spec {
    Item {
        category: Category,
        name: Option<&'static str>,
        children: Vec<Spec>,
    },
    Impl {
        ty: Option<&'static str>,
        tr: Option<&'static str>,
        children: Vec<Spec>,
    },
    /// Any node kind the walker does not recognize (expression, block, ...)
    Other { children: Vec<Spec> },
}

pub fn item(category: Category, name: &'static str, children: Vec<Spec>) -> Spec {
    Spec::Item {
        category,
        name: Some(name),
        children,
    }
}

pub fn anonymous(category: Category, children: Vec<Spec>) -> Spec {
    Spec::Item {
        category,
        name: None,
        children,
    }
}

pub fn impl_block(
    ty: Option<&'static str>,
    tr: Option<&'static str>,
    children: Vec<Spec>,
) -> Spec {
    Spec::Impl { ty, tr, children }
}

pub fn other(children: Vec<Spec>) -> Spec {
    Spec::Other { children }
}

/// Build a tree rooted at an unrecognized "file" node, with its source text
pub fn build(items: Vec<Spec>) -> (String, TestNode) {
    let mut source = String::new();
    let mut root = TestNode::leaf(0, 0);
    for spec in &items {
        root.children.push(layout(spec, &mut source));
    }
    root.end = source.len();
    (source, root)
}

fn keyword(category: Category) -> &'static str {
    match category {
        Category::Enum => "enum",
        Category::Struct => "struct",
        Category::Trait => "trait",
        Category::ImplBlock => "impl",
        Category::Function => "fn",
        Category::Module => "mod",
    }
}

fn push_token(source: &mut String, text: &str) -> Box<TestNode> {
    let start = source.len();
    source.push_str(text);
    Box::new(TestNode::leaf(start, source.len()))
}

fn layout(spec: &Spec, source: &mut String) -> TestNode {
    let start = source.len();
    let mut node = TestNode::leaf(start, start);

    let children = match spec {
        Spec::Item {
            category,
            name,
            children,
        } => {
            node.category = Some(*category);
            source.push_str(keyword(*category));
            source.push(' ');
            if let Some(name) = name {
                node.name = Some(push_token(source, name));
            }
            children
        }
        Spec::Impl { ty, tr, children } => {
            node.category = Some(Category::ImplBlock);
            source.push_str("impl ");
            if let Some(tr) = tr {
                node.impl_trait = Some(push_token(source, tr));
                source.push_str(" for ");
            }
            if let Some(ty) = ty {
                node.impl_type = Some(push_token(source, ty));
            }
            children
        }
        Spec::Other { children } => children,
    };

    source.push_str(" {\n");
    for child in children {
        node.children.push(layout(child, source));
    }
    source.push_str("}\n");

    node.end = source.len();
    node
}

/// Source text covered by a region
pub fn text<'a>(source: &'a str, region: &RegionDescriptor) -> &'a str {
    &source[region.start..region.end]
}

/// The heading (Header or Subheader) region over the name `name`
pub fn heading<'a>(
    source: &str,
    regions: &'a [RegionDescriptor],
    name: &str,
) -> &'a RegionDescriptor {
    regions
        .iter()
        .find(|r| text(source, r) == name && matches!(r.role, Role::Header | Role::Subheader))
        .unwrap_or_else(|| panic!("no heading over {:?}", name))
}

/// All Block regions declared as `declared`
pub fn blocks(regions: &[RegionDescriptor], declared: Category) -> Vec<RegionDescriptor> {
    regions
        .iter()
        .filter(|r| r.role == Role::Block && r.declared == declared)
        .copied()
        .collect()
}
