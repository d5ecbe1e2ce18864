// ABOUTME: Payload module - assembles the document handed to the web editor.
// ABOUTME: Pure function of its inputs apart from the build timestamp.

mod builder;

pub use builder::*;
