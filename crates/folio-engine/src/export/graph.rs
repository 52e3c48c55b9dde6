//! Format-agnostic word-processing object graph.
//!
//! The shapes mirror what a document serializer needs (sections of
//! paragraphs and tables, runs with character formatting) without tying the
//! engine to one file format.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportGraph {
    pub sections: Vec<Section>,
}

impl ExportGraph {
    /// Every block of every section, in order
    pub fn blocks(&self) -> impl Iterator<Item = &ExportBlock> {
        self.sections.iter().flat_map(|section| section.blocks.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub blocks: Vec<ExportBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExportBlock {
    Paragraph(ParagraphBlock),
    Table(TableBlock),
}

impl ExportBlock {
    pub fn as_paragraph(&self) -> Option<&ParagraphBlock> {
        match self {
            ExportBlock::Paragraph(paragraph) => Some(paragraph),
            ExportBlock::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableBlock> {
        match self {
            ExportBlock::Table(table) => Some(table),
            ExportBlock::Paragraph(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParagraphBlock {
    pub runs: Vec<ExportRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<Indent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl ParagraphBlock {
    pub fn new(runs: Vec<ExportRun>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeadingLevel {
    Heading1,
    Heading2,
    Heading3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Paragraph indentation in twentieths of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indent {
    pub left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bullet {
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportRun {
    pub text: String,
    pub bold: bool,
    pub italics: bool,
    pub underline: bool,
    pub strike: bool,
    pub subscript: bool,
    pub superscript: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading: Option<Shading>,
    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl ExportRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadingType {
    /// Solid background with no pattern
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shading {
    #[serde(rename = "type")]
    pub kind: ShadingType,
    /// Hex colour without the leading `#`
    pub fill: String,
}

impl Shading {
    pub fn clear(color: &str) -> Self {
        Self {
            kind: ShadingType::Clear,
            fill: color.strip_prefix('#').unwrap_or(color).to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableBlock {
    pub rows: Vec<TableRowBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRowBlock {
    pub cells: Vec<TableCellBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCellBlock {
    pub paragraphs: Vec<ParagraphBlock>,
}
