use serde::{Deserialize, Serialize};

use crate::editing::table::{self, ColumnInsertion, InsertPosition};
use crate::model::{Document, NodePath};

/// Structural edit commands issued by the table menu and toolbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Cmd {
    InsertRow { position: InsertPosition },
    InsertColumn { position: InsertPosition },
    #[serde(rename = "remove")]
    RemoveTable,
    InsertTable { rows: usize, columns: usize },
}

/// One entry of the table context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub cmd: Cmd,
}

/// Actions offered when right-clicking inside a table
pub fn table_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            icon: "insertColumnRight",
            label: "Insert Columns to the Right",
            cmd: Cmd::InsertColumn {
                position: InsertPosition::After,
            },
        },
        MenuEntry {
            icon: "insertColumnLeft",
            label: "Insert Columns to the Left",
            cmd: Cmd::InsertColumn {
                position: InsertPosition::At,
            },
        },
        MenuEntry {
            icon: "insertRowAbove",
            label: "Insert Row Above",
            cmd: Cmd::InsertRow {
                position: InsertPosition::At,
            },
        },
        MenuEntry {
            icon: "insertRowBelow",
            label: "Insert Row Below",
            cmd: Cmd::InsertRow {
                position: InsertPosition::After,
            },
        },
        MenuEntry {
            icon: "trashCan",
            label: "Remove Table",
            cmd: Cmd::RemoveTable,
        },
    ]
}

/// What a command actually changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Edit {
    RowInserted(NodePath),
    ColumnInserted(ColumnInsertion),
    TableRemoved(NodePath),
    TableInserted(NodePath),
}

impl Edit {
    pub(crate) fn changed(&self) -> Vec<NodePath> {
        match self {
            Edit::RowInserted(path) | Edit::TableRemoved(path) | Edit::TableInserted(path) => {
                vec![path.clone()]
            }
            Edit::ColumnInserted(column) => column.cells().collect(),
        }
    }
}

/// Run `cmd` against the tree. `None` when it left the tree untouched.
pub(crate) fn execute(doc: &mut Document, selection: Option<&NodePath>, cmd: &Cmd) -> Option<Edit> {
    match *cmd {
        Cmd::InsertRow { position } => {
            table::insert_row(doc, selection?, position).map(Edit::RowInserted)
        }
        Cmd::InsertColumn { position } => {
            table::insert_column(doc, selection?, position).map(Edit::ColumnInserted)
        }
        Cmd::RemoveTable => table::remove_table(doc, selection?).map(Edit::TableRemoved),
        Cmd::InsertTable { rows, columns } => {
            table::insert_table(doc, selection, rows, columns).map(Edit::TableInserted)
        }
    }
}

/// Carry the selection through an edit so it keeps pointing at the same
/// content. `doc` is the tree after the edit.
pub(crate) fn transform_selection(
    doc: &Document,
    selection: Option<&NodePath>,
    edit: &Edit,
) -> Option<NodePath> {
    match edit {
        Edit::RowInserted(row) => selection.map(|path| path.transform_insert(row)),
        Edit::ColumnInserted(column) => selection.map(|path| {
            match path.indices().get(column.table.len()) {
                Some(&row) if column.table.is_ancestor_of(path) => {
                    path.transform_insert(&column.table.child(row).child(column.index))
                }
                _ => path.clone(),
            }
        }),
        Edit::TableRemoved(table) => {
            if let Some(path) = selection
                && let Some(moved) = path.transform_remove(table)
            {
                return Some(moved);
            }
            doc.first_leaf(table).or_else(|| {
                let previous = table.last()?.checked_sub(1)?;
                doc.first_leaf(&table.parent()?.child(previous))
            })
        }
        Edit::TableInserted(table) => doc.first_leaf(table),
    }
}
