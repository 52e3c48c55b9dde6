//! # Export Transformer
//!
//! Pure mapping from a [`Document`](crate::model::Document) to an
//! [`ExportGraph`]: sections of paragraphs and tables that a word-processing
//! serializer consumes. Serializing the graph to bytes and saving it are
//! left to the caller.
//!
//! ## Modules
//!
//! - **`graph`**: the export object graph
//! - **`lookup`**: font size / font family lookup tables
//! - **`transform`**: `export_document` and the shared run builder

pub mod graph;
pub mod lookup;
pub mod transform;

pub use graph::{
    Alignment, Bullet, ExportBlock, ExportGraph, ExportRun, HeadingLevel, Indent, ParagraphBlock,
    Section, Shading, ShadingType, TableBlock, TableCellBlock, TableRowBlock,
};
pub use lookup::LookupTables;
pub use transform::{BLOCKQUOTE_INDENT, export_document};
