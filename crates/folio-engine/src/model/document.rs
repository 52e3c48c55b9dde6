use serde::{Deserialize, Serialize};

use crate::model::{Element, ElementKind, InvariantError, Node, NodePath};

/// The document tree: an ordered sequence of top-level block nodes.
///
/// Nodes are addressed by [`NodePath`] and every lookup walks the tree from
/// the root, so a path computed before an edit is simply re-resolved (or
/// fails to resolve) afterwards rather than dangling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub(crate) children: Vec<Node>,
}

impl Document {
    pub fn new(blocks: Vec<Node>) -> Self {
        Self { children: blocks }
    }

    /// A fresh document: one empty paragraph
    pub fn empty() -> Self {
        Self::new(vec![Element::empty(ElementKind::Paragraph).into()])
    }

    pub fn blocks(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn into_blocks(self) -> Vec<Node> {
        self.children
    }

    /// Resolve `path` to a node. The root path resolves to nothing because
    /// the document itself is not a node.
    pub fn node(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.children.get(*first)?;
        for &index in rest {
            node = node.children().get(index)?;
        }
        Some(node)
    }

    pub fn node_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.children.get_mut(*first)?;
        for &index in rest {
            node = node.children_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// Children of the node at `parent`; the root path yields the top-level blocks
    pub fn children(&self, parent: &NodePath) -> Option<&[Node]> {
        if parent.is_root() {
            return Some(&self.children);
        }
        self.node(parent).map(Node::children)
    }

    pub fn children_mut(&mut self, parent: &NodePath) -> Option<&mut Vec<Node>> {
        if parent.is_root() {
            return Some(&mut self.children);
        }
        self.node_mut(parent)?.children_mut()
    }

    /// Deepest element on `path` (the node itself included) whose kind
    /// satisfies `matches`.
    ///
    /// `None` when the path does not resolve against this tree.
    pub fn find_ancestor(
        &self,
        path: &NodePath,
        mut matches: impl FnMut(&ElementKind) -> bool,
    ) -> Option<NodePath> {
        self.node(path)?;
        path.lineage().find(|candidate| {
            self.node(candidate)
                .and_then(Node::kind)
                .is_some_and(|kind| matches(kind))
        })
    }

    /// Path of the first text run at or below `path`
    pub fn first_leaf(&self, path: &NodePath) -> Option<NodePath> {
        let mut current = path.clone();
        let mut node = self.node(path)?;
        while let Node::Element(element) = node {
            node = element.children.first()?;
            current = current.child(0);
        }
        Some(current)
    }

    pub fn text(&self) -> String {
        self.children
            .iter()
            .map(Node::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check the structural invariants of the tree (table shape, list
    /// children, non-empty containers).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        crate::model::invariants::check(self)
    }
}

impl From<Vec<Node>> for Document {
    fn from(blocks: Vec<Node>) -> Self {
        Self::new(blocks)
    }
}
