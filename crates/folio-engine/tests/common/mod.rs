// Shared by several test binaries; not every helper is used by each
#![allow(dead_code)]

use folio_engine::{Document, Element, ElementKind, Node, NodePath, TextRun};

pub fn paragraph(text: &str) -> Node {
    Element::paragraph([TextRun::new(text)]).into()
}

pub fn item(text: &str) -> Node {
    Element::new(ElementKind::ListItem, vec![TextRun::new(text).into()]).into()
}

pub fn list(kind: ElementKind, items: &[&str]) -> Node {
    Element::new(kind, items.iter().map(|text| item(text)).collect()).into()
}

/// Table whose cells hold the given texts, row by row
pub fn table(rows: &[&[&str]]) -> Node {
    let rows = rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|text| Element::new(ElementKind::TableCell, vec![paragraph(text)]).into())
                .collect();
            Element::new(ElementKind::TableRow, cells).into()
        })
        .collect();
    Element::new(ElementKind::Table, rows).into()
}

/// Cell counts of each row of the table at `path`
pub fn row_widths(doc: &Document, path: &NodePath) -> Vec<usize> {
    doc.node(path)
        .map(|table| table.children().iter().map(|row| row.children().len()).collect())
        .unwrap_or_default()
}
