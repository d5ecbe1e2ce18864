// ABOUTME: Editor module - parses edited documents and drives the
// ABOUTME: open/apply round trip with the web editor.

pub mod parser;
mod session;

pub use parser::{HolderEdit, parse_document, parse_permissions};
pub use session::*;
