use crate::model::NodePath;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Paths of inserted or removed nodes, against the tree they apply to
    pub changed: Vec<NodePath>,
    pub new_selection: Option<NodePath>,
    pub version: u64,
}

impl Patch {
    pub(crate) fn noop(selection: Option<NodePath>, version: u64) -> Self {
        Self {
            changed: Vec::new(),
            new_selection: selection,
            version,
        }
    }

    /// True when the command left the document untouched
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}
