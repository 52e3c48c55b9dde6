/*!
 * # Editing Core Module
 *
 * Structural editing of the document tree, driven by the host editor's
 * selection path.
 *
 * ## Architecture Overview
 *
 * ### 1. Explicit Session
 * - An [`EditorSession`] owns the document, the current selection path and a
 *   version counter
 * - Callers pass the session to whatever needs it; there is no global editor
 *
 * ### 2. Command-Based Editing
 * - Menu and toolbar actions are [`Cmd`] values applied with
 *   [`EditorSession::apply`], which returns a [`Patch`]
 * - Commands that find nothing to act on (no table under the caret) are
 *   silent no-ops
 *
 * ### 3. Paths, Not Pointers
 * - Nodes are located by [`NodePath`](crate::model::NodePath) and every
 *   operation resolves the path against the current tree
 * - The selection is transformed through each edit so it keeps pointing at
 *   the same content
 *
 * ## Module Structure
 *
 * - **`table`**: row/column insertion, table insertion and removal
 * - **`commands`**: `Cmd` enum, the table menu, selection transformation
 * - **`session`**: `EditorSession`
 * - **`patch`**: edit result metadata
 */

pub mod commands;
pub mod patch;
pub mod session;
pub mod table;

pub use commands::{Cmd, MenuEntry, table_menu};
pub use patch::Patch;
pub use session::EditorSession;
pub use table::{
    ColumnInsertion, InsertPosition, insert_column, insert_row, insert_table, remove_table,
    table_at,
};
