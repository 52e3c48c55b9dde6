//! # Element Rendering
//!
//! The editor's element/leaf dispatch as a pure function: every node kind
//! maps to one HTML wrapper, every leaf mark to one nested tag or style span.

pub mod html;

pub use html::render_html;
