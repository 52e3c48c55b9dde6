use crate::editing::{Cmd, Patch, commands, table};
use crate::export::{ExportGraph, LookupTables, export_document};
use crate::model::{Document, NodePath};

/// Editing context for one open document
///
/// The session owns the document tree, the host editor's current selection
/// path and a version counter. It is passed explicitly to whatever needs the
/// editor; there is no process-wide editor instance.
///
/// ## Usage Pattern
///
/// ```rust
/// # use folio_engine::{Cmd, Document, EditorSession, Element, InsertPosition, NodePath};
/// let doc = Document::new(vec![Element::table(2, 2).into()]);
/// let mut session = EditorSession::new(doc);
///
/// // The host reports the caret inside the first cell
/// session.set_selection(Some(NodePath::from([0, 0, 0, 0, 0])));
///
/// let patch = session.apply(Cmd::InsertRow { position: InsertPosition::After });
/// assert!(!patch.is_noop());
/// assert_eq!(patch.changed, vec![NodePath::from([0, 1])]);
/// # assert_eq!(session.version(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub(crate) document: Document,
    /// Path of the node holding the caret, as reported by the host editor
    pub(crate) selection: Option<NodePath>,
    /// Incremented on every edit that changes the tree
    pub(crate) version: u64,
}

impl EditorSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: None,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn selection(&self) -> Option<&NodePath> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<NodePath>) {
        self.selection = selection;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the caret sits inside a table (enables the table menu)
    pub fn in_table(&self) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| table::table_at(&self.document, selection).is_some())
    }

    /// Apply a command to the document.
    ///
    /// A command that finds nothing to act on returns a no-op patch and
    /// leaves both the tree and the version as they were. Otherwise the
    /// version is bumped and the selection is carried through the edit.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let Some(edit) = commands::execute(&mut self.document, self.selection.as_ref(), &cmd)
        else {
            log::debug!("{cmd:?} left the document unchanged");
            return Patch::noop(self.selection.clone(), self.version);
        };

        let new_selection =
            commands::transform_selection(&self.document, self.selection.as_ref(), &edit);
        self.selection = new_selection.clone();
        self.version += 1;

        if cfg!(debug_assertions)
            && let Err(err) = self.document.check_invariants()
        {
            log::warn!("document invariant broken after {cmd:?}: {err}");
        }

        Patch {
            changed: edit.changed(),
            new_selection,
            version: self.version,
        }
    }

    pub fn export(&self, tables: &LookupTables) -> ExportGraph {
        export_document(&self.document, tables)
    }

    pub fn render_html(&self, tables: &LookupTables) -> String {
        crate::render::render_html(&self.document, tables)
    }
}
