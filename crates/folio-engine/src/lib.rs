pub mod editing;
pub mod export;
pub mod model;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Cmd, EditorSession, InsertPosition, Patch, table_menu};
pub use export::{ExportBlock, ExportGraph, LookupTables, export_document};
pub use model::{Document, Element, ElementKind, Mark, Node, NodePath, TextRun};
pub use render::render_html;
