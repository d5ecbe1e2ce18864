// ABOUTME: Holder module - users and groups, their identifier strings, and
// ABOUTME: the resolver/sender collaborators used to look them up.

pub mod identifier;
mod resolver;
mod types;

pub use identifier::HolderId;
pub use resolver::*;
pub use types::*;
