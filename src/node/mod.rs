// ABOUTME: Node module - the permission grant model and its JSON codec.
// ABOUTME: Encoding is compact, decoding is tolerant of stray entries.

pub mod codec;
mod model;

pub use model::*;

#[cfg(test)]
mod codec_test;
