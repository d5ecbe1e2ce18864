// ABOUTME: Context module - the multi-valued context set and its JSON codec.
// ABOUTME: Used by the node codec for the optional "context" field.

pub mod codec;
mod set;

pub use set::*;
