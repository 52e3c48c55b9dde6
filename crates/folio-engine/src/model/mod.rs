//! # Document Tree Model
//!
//! The structured document the editor works on: an ordered sequence of
//! block nodes, each either a [`TextRun`] leaf or an [`Element`] container
//! with a semantic [`ElementKind`] and nested children.
//!
//! ## Invariants
//!
//! - `table` children are `table-row`s, `table-row` children are `table-cell`s,
//!   and every row of a table has the same number of cells
//! - list children are `list-item`s
//! - containers always hold at least one child (an empty block holds one
//!   empty text run)
//!
//! [`Document::check_invariants`] reports the first violation.

pub mod document;
pub mod invariants;
pub mod node;
pub mod path;

pub use document::Document;
pub use invariants::InvariantError;
pub use node::{Element, ElementKind, Mark, Node, TextRun};
pub use path::NodePath;
