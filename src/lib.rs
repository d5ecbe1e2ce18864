// ABOUTME: Root module for webedit - permission data exchange with a web editor.
// ABOUTME: Re-exports the codecs, payload builder, paste client and editor facade.

pub mod context;
pub mod editor;
pub mod error;
pub mod holder;
pub mod node;
pub mod paste;
pub mod payload;
pub mod prelude;

pub use error::WebEditError;
