//! Shared fixtures for unit tests.

use crate::model::{Document, Element, ElementKind, Node, NodePath, TextRun};

pub fn paragraph(text: &str) -> Node {
    Element::paragraph([TextRun::new(text)]).into()
}

pub fn cell(text: &str) -> Node {
    Element::new(ElementKind::TableCell, vec![paragraph(text)]).into()
}

/// Table whose cells hold the given texts, row by row
pub fn table(rows: &[&[&str]]) -> Node {
    Element::new(
        ElementKind::Table,
        rows.iter()
            .map(|row| {
                Element::new(ElementKind::TableRow, row.iter().map(|t| cell(t)).collect()).into()
            })
            .collect(),
    )
    .into()
}

/// `intro` paragraph, a 2x2 table (`a b / c d`), `outro` paragraph
pub fn sample_document() -> Document {
    Document::new(vec![
        paragraph("intro"),
        table(&[&["a", "b"], &["c", "d"]]),
        paragraph("outro"),
    ])
}

/// Text of the cell at `row`, `column` in the table at top-level `block`
pub fn cell_text(doc: &Document, block: usize, row: usize, column: usize) -> String {
    doc.node(&NodePath::from([block, row, column]))
        .map(Node::text)
        .unwrap_or_default()
}
