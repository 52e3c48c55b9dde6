//! Structural table edits.
//!
//! Every operation takes the selection path reported by the host editor and
//! looks for the enclosing table structure by walking that path upwards. A
//! selection that is not inside a table is not an error: the operation does
//! nothing and returns `None`, so a misfired menu item is harmless.

use serde::{Deserialize, Serialize};

use crate::model::{Document, Element, ElementKind, Node, NodePath};

/// Where a new row or column goes relative to the one holding the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Take the selected row/column's index, pushing it one step on
    At,
    /// Immediately following the selected row/column
    After,
}

impl InsertPosition {
    fn index_for(self, selected: usize) -> usize {
        match self {
            InsertPosition::At => selected,
            InsertPosition::After => selected + 1,
        }
    }
}

/// Result of a column insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInsertion {
    pub table: NodePath,
    /// Index of the new cell in every row
    pub index: usize,
    pub rows: usize,
}

impl ColumnInsertion {
    /// Paths of the inserted cells, one per row
    pub fn cells(&self) -> impl Iterator<Item = NodePath> + '_ {
        (0..self.rows).map(|row| self.table.child(row).child(self.index))
    }
}

/// Path of the innermost table containing `selection`
pub fn table_at(doc: &Document, selection: &NodePath) -> Option<NodePath> {
    doc.find_ancestor(selection, |kind| *kind == ElementKind::Table)
}

fn parent_is(doc: &Document, path: &NodePath, kind: &ElementKind) -> bool {
    path.parent()
        .and_then(|parent| doc.node(&parent))
        .is_some_and(|parent| parent.kind() == Some(kind))
}

fn row_at(doc: &Document, selection: &NodePath) -> Option<NodePath> {
    let row = doc.find_ancestor(selection, |kind| *kind == ElementKind::TableRow)?;
    parent_is(doc, &row, &ElementKind::Table).then_some(row)
}

fn cell_at(doc: &Document, selection: &NodePath) -> Option<NodePath> {
    let cell = doc.find_ancestor(selection, |kind| *kind == ElementKind::TableCell)?;
    let row = cell.parent()?;
    (parent_is(doc, &cell, &ElementKind::TableRow) && parent_is(doc, &row, &ElementKind::Table))
        .then_some(cell)
}

/// Insert an empty row next to the row holding `selection`.
///
/// The new row has as many cells as the selected one. Returns its path.
pub fn insert_row(
    doc: &mut Document,
    selection: &NodePath,
    position: InsertPosition,
) -> Option<NodePath> {
    let Some(row) = row_at(doc, selection) else {
        log::debug!("insert_row: no table row at {selection}");
        return None;
    };
    let width = doc.node(&row)?.children().len();
    let table = row.parent()?;
    let index = position.index_for(row.last()?);

    doc.children_mut(&table)?
        .insert(index, Element::table_row(width).into());
    Some(table.child(index))
}

/// Insert an empty cell into every row of the table, next to the column
/// holding `selection`.
pub fn insert_column(
    doc: &mut Document,
    selection: &NodePath,
    position: InsertPosition,
) -> Option<ColumnInsertion> {
    let Some(cell) = cell_at(doc, selection) else {
        log::debug!("insert_column: no table cell at {selection}");
        return None;
    };
    let table = cell.parent()?.parent()?;
    let index = position.index_for(cell.last()?);

    let rows = doc.children_mut(&table)?;
    for row in rows.iter_mut() {
        if let Some(cells) = row.children_mut() {
            let at = index.min(cells.len());
            cells.insert(at, Element::table_cell().into());
        }
    }

    Some(ColumnInsertion {
        table,
        index,
        rows: rows.len(),
    })
}

/// Delete the table holding `selection`. Returns the removed table's path.
///
/// A parent left empty receives an empty paragraph so it stays a valid
/// container.
pub fn remove_table(doc: &mut Document, selection: &NodePath) -> Option<NodePath> {
    let Some(table) = table_at(doc, selection) else {
        log::debug!("remove_table: no table at {selection}");
        return None;
    };
    let parent = table.parent()?;
    let index = table.last()?;

    let siblings = doc.children_mut(&parent)?;
    siblings.remove(index);
    if siblings.is_empty() {
        siblings.push(Element::empty(ElementKind::Paragraph).into());
    }
    Some(table)
}

/// Insert a `rows` x `columns` table of empty cells after the top-level block
/// holding `selection`, or at the end of the document without one.
pub fn insert_table(
    doc: &mut Document,
    selection: Option<&NodePath>,
    rows: usize,
    columns: usize,
) -> Option<NodePath> {
    if rows == 0 || columns == 0 {
        log::debug!("insert_table: refusing {rows}x{columns} table");
        return None;
    }
    let index = selection
        .filter(|path| doc.node(path).is_some())
        .and_then(|path| path.indices().first())
        .map_or(doc.len(), |block| block + 1);

    let table: Node = Element::table(rows, columns).into();
    doc.children_mut(&NodePath::root())?.insert(index, table);
    Some(NodePath::from([index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{cell_text, paragraph, sample_document, table};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn leaf(row: usize, column: usize) -> NodePath {
        NodePath::from([1, row, column, 0, 0])
    }

    fn row_texts(doc: &Document, row: usize) -> Vec<String> {
        doc.node(&NodePath::from([1, row]))
            .unwrap()
            .children()
            .iter()
            .map(Node::text)
            .collect()
    }

    #[rstest]
    #[case(InsertPosition::At, 0, 0)]
    #[case(InsertPosition::After, 0, 1)]
    #[case(InsertPosition::At, 1, 1)]
    #[case(InsertPosition::After, 1, 2)]
    fn test_insert_row_position(
        #[case] position: InsertPosition,
        #[case] selected_row: usize,
        #[case] expected: usize,
    ) {
        let mut doc = sample_document();
        let inserted = insert_row(&mut doc, &leaf(selected_row, 0), position);

        assert_eq!(inserted, Some(NodePath::from([1, expected])));
        assert_eq!(row_texts(&doc, expected), vec!["", ""]);
        assert_eq!(doc.node(&NodePath::from([1])).unwrap().children().len(), 3);
        assert!(doc.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_row_keeps_existing_rows_in_order() {
        let mut doc = sample_document();
        insert_row(&mut doc, &leaf(0, 1), InsertPosition::After);

        assert_eq!(row_texts(&doc, 0), vec!["a", "b"]);
        assert_eq!(row_texts(&doc, 1), vec!["", ""]);
        assert_eq!(row_texts(&doc, 2), vec!["c", "d"]);
    }

    #[test]
    fn test_insert_row_from_row_path_itself() {
        let mut doc = sample_document();
        let inserted = insert_row(&mut doc, &NodePath::from([1, 1]), InsertPosition::At);
        assert_eq!(inserted, Some(NodePath::from([1, 1])));
        assert_eq!(row_texts(&doc, 2), vec!["c", "d"]);
    }

    #[rstest]
    #[case(InsertPosition::At, 0, 0)]
    #[case(InsertPosition::After, 0, 1)]
    #[case(InsertPosition::After, 1, 2)]
    fn test_insert_column_touches_every_row(
        #[case] position: InsertPosition,
        #[case] selected_column: usize,
        #[case] expected: usize,
    ) {
        let mut doc = sample_document();
        let inserted = insert_column(&mut doc, &leaf(1, selected_column), position).unwrap();

        assert_eq!(inserted.index, expected);
        assert_eq!(inserted.rows, 2);
        for row in 0..2 {
            assert_eq!(row_texts(&doc, row).len(), 3);
            assert_eq!(cell_text(&doc, 1, row, expected), "");
        }
        assert!(doc.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_column_after_first_keeps_neighbours() {
        let mut doc = sample_document();
        let inserted = insert_column(&mut doc, &leaf(0, 0), InsertPosition::After).unwrap();

        assert_eq!(row_texts(&doc, 0), vec!["a", "", "b"]);
        assert_eq!(row_texts(&doc, 1), vec!["c", "", "d"]);
        assert_eq!(
            inserted.cells().collect::<Vec<_>>(),
            vec![NodePath::from([1, 0, 1]), NodePath::from([1, 1, 1])]
        );
    }

    #[rstest]
    #[case(NodePath::from([0, 0]))]
    #[case(NodePath::from([2]))]
    #[case(NodePath::from([7, 0]))]
    #[case(NodePath::root())]
    fn test_operations_outside_a_table_do_nothing(#[case] selection: NodePath) {
        let mut doc = sample_document();
        let before = doc.clone();

        assert_eq!(insert_row(&mut doc, &selection, InsertPosition::After), None);
        assert_eq!(insert_column(&mut doc, &selection, InsertPosition::At), None);
        assert_eq!(remove_table(&mut doc, &selection), None);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_selection_on_table_node_has_no_row() {
        let mut doc = sample_document();
        let before = doc.clone();
        assert_eq!(
            insert_row(&mut doc, &NodePath::from([1]), InsertPosition::At),
            None
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_remove_table_keeps_siblings() {
        let mut doc = sample_document();
        let removed = remove_table(&mut doc, &leaf(1, 1));

        assert_eq!(removed, Some(NodePath::from([1])));
        assert_eq!(doc.blocks(), &[paragraph("intro"), paragraph("outro")]);
    }

    #[test]
    fn test_remove_only_block_leaves_empty_paragraph() {
        let mut doc = Document::new(vec![table(&[&["x"]])]);
        remove_table(&mut doc, &NodePath::from([0, 0, 0, 0, 0]));

        assert_eq!(doc, Document::empty());
    }

    #[test]
    fn test_nested_table_is_targeted_first() {
        let inner = table(&[&["in"]]);
        let outer = Element::new(
            ElementKind::Table,
            vec![
                Element::new(
                    ElementKind::TableRow,
                    vec![Element::new(ElementKind::TableCell, vec![inner]).into()],
                )
                .into(),
            ],
        );
        let mut doc = Document::new(vec![outer.into()]);
        let inner_leaf = NodePath::from([0, 0, 0, 0, 0, 0, 0, 0]);

        let row = insert_row(&mut doc, &inner_leaf, InsertPosition::After);
        assert_eq!(row, Some(NodePath::from([0, 0, 0, 0, 1])));
        assert_eq!(doc.node(&NodePath::from([0])).unwrap().children().len(), 1);

        let removed = remove_table(&mut doc, &inner_leaf);
        assert_eq!(removed, Some(NodePath::from([0, 0, 0, 0])));
        // The outer cell gets a placeholder paragraph instead of going empty
        assert!(
            doc.node(&NodePath::from([0, 0, 0, 0]))
                .unwrap()
                .is_kind(|kind| *kind == ElementKind::Paragraph)
        );
        assert!(doc.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_table_after_selected_block() {
        let mut doc = sample_document();
        let inserted = insert_table(&mut doc, Some(&NodePath::from([0, 0])), 3, 2);

        assert_eq!(inserted, Some(NodePath::from([1])));
        assert_eq!(doc.len(), 4);
        let new_table = doc.node(&NodePath::from([1])).unwrap();
        assert_eq!(new_table.children().len(), 3);
        assert!(new_table.children().iter().all(|row| row.children().len() == 2));
        assert!(doc.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_table_without_selection_appends() {
        let mut doc = sample_document();
        assert_eq!(
            insert_table(&mut doc, None, 1, 1),
            Some(NodePath::from([3]))
        );
        assert_eq!(insert_table(&mut doc, None, 0, 4), None);
        assert_eq!(doc.len(), 4);
    }
}
