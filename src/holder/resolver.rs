// ABOUTME: Collaborator traits the host implements - holder lookup and the
// ABOUTME: invoking sender - plus the distinct ways resolution can fail.

use async_trait::async_trait;
use uuid::Uuid;

use super::PermissionHolder;

/// Looks up permission holders on behalf of the codec.
#[async_trait]
pub trait HolderResolver: Send + Sync {
    /// A group that is currently loaded in memory. Must not perform I/O.
    fn loaded_group(&self, name: &str) -> Option<PermissionHolder>;

    /// Load a user from persistent storage.
    ///
    /// Returns `Ok(None)` when the user cannot be loaded, `Err` on storage failure.
    async fn load_user(&self, uuid: Uuid) -> Result<Option<PermissionHolder>, anyhow::Error>;
}

/// The actor invoking an exchange, and the sink for resolution failures.
pub trait Sender: Send + Sync {
    /// Display name, including location where the host has one.
    fn name(&self) -> String;

    fn uuid(&self) -> Uuid;

    /// Tell the sender why a holder reference could not be resolved.
    fn report(&self, failure: &ResolveFailure);
}

/// Why a holder reference did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveFailure {
    #[error("Target group '{0}' does not exist")]
    GroupNotExists(String),

    #[error("Target user '{0}' is not a valid UUID")]
    NotUuid(String),

    #[error("Unable to load target user '{0}'")]
    UnableToLoad(Uuid),

    #[error("Unknown target '{0}'")]
    UnknownTarget(String),
}
