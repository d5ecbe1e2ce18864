// ABOUTME: Paste module - remote store for the editor document.
// ABOUTME: Gist client, its configuration, and the HTTP transport seam.

mod config;
mod gist;
mod transport;

pub use config::*;
pub use gist::*;
pub use transport::*;

#[cfg(test)]
mod gist_test;
#[cfg(test)]
mod transport_test;
