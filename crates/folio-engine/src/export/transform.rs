use crate::export::graph::{
    Alignment, Bullet, ExportBlock, ExportGraph, ExportRun, HeadingLevel, Indent, ParagraphBlock,
    Section, Shading, TableBlock, TableCellBlock, TableRowBlock,
};
use crate::export::lookup::{LookupTables, MONOSPACE};
use crate::model::{Document, Element, ElementKind, Node, TextRun};

/// Left indent applied to block quotes, in twentieths of a point (half an inch)
pub const BLOCKQUOTE_INDENT: u32 = 720;

/// Map a document tree to an export graph with a single section.
///
/// Each top-level node maps to a list of blocks (lists yield one paragraph
/// per item, everything else a single block); those lists are then
/// flattened one level into the section. Unrecognized kinds export as plain
/// paragraphs.
pub fn export_document(document: &Document, tables: &LookupTables) -> ExportGraph {
    let exporter = Exporter { tables };
    let mapped: Vec<Vec<ExportBlock>> = document
        .blocks()
        .iter()
        .map(|node| exporter.blocks(node))
        .collect();

    ExportGraph {
        sections: vec![Section {
            blocks: mapped.into_iter().flatten().collect(),
        }],
    }
}

struct Exporter<'a> {
    tables: &'a LookupTables,
}

impl Exporter<'_> {
    fn blocks(&self, node: &Node) -> Vec<ExportBlock> {
        let element = match node {
            Node::Element(element) => element,
            Node::Text(run) => {
                return vec![ExportBlock::Paragraph(ParagraphBlock::new(vec![self.run(run)]))];
            }
        };

        match &element.kind {
            ElementKind::Table => vec![ExportBlock::Table(self.table(element))],
            // Numbering comes from the item's position, never from stored data
            ElementKind::OrderedList => element
                .children
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let mut runs = vec![ExportRun {
                        bold: true,
                        ..ExportRun::new(format!("{}. ", index + 1))
                    }];
                    self.collect_runs(item, &mut runs);
                    ExportBlock::Paragraph(ParagraphBlock::new(runs))
                })
                .collect(),
            ElementKind::UnorderedList => element
                .children
                .iter()
                .map(|item| {
                    ExportBlock::Paragraph(ParagraphBlock {
                        bullet: Some(Bullet { level: 0 }),
                        ..ParagraphBlock::new(self.node_runs(item))
                    })
                })
                .collect(),
            _ => vec![ExportBlock::Paragraph(self.paragraph(element))],
        }
    }

    /// Single-paragraph mapping, also used for everything inside table cells
    fn paragraph(&self, element: &Element) -> ParagraphBlock {
        let mut runs = Vec::new();
        self.element_runs(element, &mut runs);
        let paragraph = ParagraphBlock::new(runs);
        match &element.kind {
            ElementKind::HeadingOne => ParagraphBlock {
                heading: Some(HeadingLevel::Heading1),
                ..paragraph
            },
            ElementKind::HeadingTwo => ParagraphBlock {
                heading: Some(HeadingLevel::Heading2),
                ..paragraph
            },
            ElementKind::HeadingThree => ParagraphBlock {
                heading: Some(HeadingLevel::Heading3),
                ..paragraph
            },
            ElementKind::Blockquote => ParagraphBlock {
                alignment: Some(Alignment::Left),
                indent: Some(Indent {
                    left: BLOCKQUOTE_INDENT,
                }),
                ..paragraph
            },
            ElementKind::AlignLeft => ParagraphBlock {
                alignment: Some(Alignment::Left),
                ..paragraph
            },
            ElementKind::AlignCenter => ParagraphBlock {
                alignment: Some(Alignment::Center),
                ..paragraph
            },
            ElementKind::AlignRight => ParagraphBlock {
                alignment: Some(Alignment::Right),
                ..paragraph
            },
            ElementKind::Unknown => {
                log::debug!("exporting unrecognized element as a plain paragraph");
                paragraph
            }
            _ => paragraph,
        }
    }

    fn table(&self, table: &Element) -> TableBlock {
        TableBlock {
            rows: table
                .children
                .iter()
                .map(|row| TableRowBlock {
                    cells: row.children().iter().map(|cell| self.cell(cell)).collect(),
                })
                .collect(),
        }
    }

    /// One paragraph per block child; bare runs and inline elements between
    /// blocks are gathered into a paragraph of their own.
    fn cell(&self, cell: &Node) -> TableCellBlock {
        let mut paragraphs = Vec::new();
        let mut loose = Vec::new();

        for child in cell.children() {
            match child {
                Node::Element(element) if !element.kind.is_inline() => {
                    if !loose.is_empty() {
                        paragraphs.push(ParagraphBlock::new(std::mem::take(&mut loose)));
                    }
                    paragraphs.push(self.paragraph(element));
                }
                inline => self.collect_runs(inline, &mut loose),
            }
        }
        if !loose.is_empty() || paragraphs.is_empty() {
            paragraphs.push(ParagraphBlock::new(loose));
        }

        TableCellBlock { paragraphs }
    }

    fn node_runs(&self, node: &Node) -> Vec<ExportRun> {
        let mut runs = Vec::new();
        self.collect_runs(node, &mut runs);
        runs
    }

    fn collect_runs(&self, node: &Node, out: &mut Vec<ExportRun>) {
        match node {
            Node::Text(run) => out.push(self.run(run)),
            Node::Element(element) => self.element_runs(element, out),
        }
    }

    /// Runs of an element's content; an equation's content is its formula
    fn element_runs(&self, element: &Element, out: &mut Vec<ExportRun>) {
        match &element.kind {
            ElementKind::Equation { formula, .. } => out.push(ExportRun::new(formula.as_str())),
            _ => {
                for child in &element.children {
                    self.collect_runs(child, out);
                }
            }
        }
    }

    /// The shared run builder: character formatting of one text run
    fn run(&self, run: &TextRun) -> ExportRun {
        let font = run
            .font_family
            .as_deref()
            .and_then(|key| self.tables.font_family(key))
            .or_else(|| {
                run.code
                    .then(|| self.tables.font_family(MONOSPACE))
                    .flatten()
            });

        ExportRun {
            text: run.text.clone(),
            bold: run.bold,
            italics: run.italic,
            underline: run.underline,
            strike: run.strikethrough,
            subscript: run.subscript,
            superscript: run.superscript,
            color: run.color.clone(),
            shading: run.background_color.as_deref().map(Shading::clear),
            size: run
                .font_size
                .as_deref()
                .and_then(|key| self.tables.font_size(key)),
            font: font.map(str::to_string),
        }
    }
}
