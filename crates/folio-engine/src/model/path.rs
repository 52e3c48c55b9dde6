use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a node as child indices from the document root.
///
/// The empty path is the document itself. A path is only meaningful against
/// the tree version it was computed from; callers resolve it again after
/// every structural edit instead of holding on to node references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Index of the node within its parent
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn parent(&self) -> Option<NodePath> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    pub fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The path itself followed by each ancestor, deepest first, stopping
    /// before the root.
    pub fn lineage(&self) -> impl Iterator<Item = NodePath> + '_ {
        (1..=self.0.len()).rev().map(|len| Self(self.0[..len].to_vec()))
    }

    /// True when `self` is a proper prefix of `other`
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    /// Where this path points after a node is inserted at `inserted`.
    pub fn transform_insert(&self, inserted: &NodePath) -> NodePath {
        let mut out = self.clone();
        if let Some(parent) = inserted.parent()
            && let Some(index) = inserted.last()
            && parent.is_ancestor_of(self)
        {
            let depth = parent.len();
            if out.0[depth] >= index {
                out.0[depth] += 1;
            }
        }
        out
    }

    /// Where this path points after the node at `removed` is deleted.
    ///
    /// Returns `None` when the path was the removed node or inside it.
    pub fn transform_remove(&self, removed: &NodePath) -> Option<NodePath> {
        if removed == self || removed.is_ancestor_of(self) {
            return None;
        }
        let mut out = self.clone();
        if let Some(parent) = removed.parent()
            && let Some(index) = removed.last()
            && parent.is_ancestor_of(self)
        {
            let depth = parent.len();
            if out.0[depth] > index {
                out.0[depth] -= 1;
            }
        }
        Some(out)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for NodePath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}
