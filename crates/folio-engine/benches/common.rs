// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use folio_engine::{Document, Element, ElementKind, Mark, Node, TextRun};

#[allow(dead_code)]
pub fn paragraph(text: &str) -> Node {
    Element::paragraph([TextRun::new(text)]).into()
}

#[allow(dead_code)]
pub fn styled_paragraph(index: usize) -> Node {
    Element::paragraph([
        TextRun::new(format!("Paragraph {index} with "))
            .with_font_size("normal")
            .with_font_family("serif"),
        TextRun::new("bold")
            .with_mark(Mark::Bold)
            .with_color("#aa0000"),
        TextRun::new(" and ").with_background("#ffff00"),
        TextRun::new("code").with_mark(Mark::Code),
    ])
    .into()
}

#[allow(dead_code)]
pub fn list(kind: ElementKind, items: usize) -> Node {
    let items = (0..items)
        .map(|i| {
            Element::new(
                ElementKind::ListItem,
                vec![TextRun::new(format!("Item {i}")).into()],
            )
            .into()
        })
        .collect();
    Element::new(kind, items).into()
}

/// Table of `rows` x `columns` cells, each with a short paragraph
#[allow(dead_code)]
pub fn filled_table(rows: usize, columns: usize) -> Node {
    let rows = (0..rows)
        .map(|r| {
            let cells = (0..columns)
                .map(|c| {
                    Element::new(
                        ElementKind::TableCell,
                        vec![paragraph(&format!("r{r}c{c}"))],
                    )
                    .into()
                })
                .collect();
            Element::new(ElementKind::TableRow, cells).into()
        })
        .collect();
    Element::new(ElementKind::Table, rows).into()
}

/// A document mixing every block shape the exporter handles
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> Document {
    let mut blocks = Vec::new();
    for section in 0..sections {
        blocks.push(
            Element::new(
                ElementKind::HeadingOne,
                vec![TextRun::new(format!("Section {section}")).into()],
            )
            .into(),
        );
        for i in 0..5 {
            blocks.push(styled_paragraph(i));
        }
        blocks.push(
            Element::new(
                ElementKind::Blockquote,
                vec![TextRun::new("Quoted text").into()],
            )
            .into(),
        );
        blocks.push(list(ElementKind::OrderedList, 5));
        blocks.push(list(ElementKind::UnorderedList, 5));
        blocks.push(filled_table(4, 4));
    }
    Document::new(blocks)
}
