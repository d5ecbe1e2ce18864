// ABOUTME: Holder identifier codec - "user/<uuid>" or "group/<name>".
// ABOUTME: Decoding resolves the reference and reports why it failed.

use std::fmt;

use uuid::Uuid;

use super::{HolderResolver, PermissionHolder, ResolveFailure, Sender};
use crate::error::WebEditError;

pub const USER_PREFIX: &str = "user/";
pub const GROUP_PREFIX: &str = "group/";

/// A parsed holder reference. Group names are not escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolderId {
    User(Uuid),
    Group(String),
}

impl HolderId {
    /// Parse a reference string without resolving it.
    pub fn parse(who: &str) -> Result<Self, ResolveFailure> {
        if let Some(group) = who.strip_prefix(GROUP_PREFIX) {
            Ok(Self::Group(group.to_string()))
        } else if let Some(user) = who.strip_prefix(USER_PREFIX) {
            Uuid::try_parse(user)
                .map(Self::User)
                .map_err(|_| ResolveFailure::NotUuid(user.to_string()))
        } else {
            Err(ResolveFailure::UnknownTarget(who.to_string()))
        }
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(uuid) => write!(f, "{USER_PREFIX}{uuid}"),
            Self::Group(name) => write!(f, "{GROUP_PREFIX}{name}"),
        }
    }
}

impl From<&PermissionHolder> for HolderId {
    fn from(holder: &PermissionHolder) -> Self {
        match holder {
            PermissionHolder::User { uuid, .. } => Self::User(*uuid),
            PermissionHolder::Group { name, .. } => Self::Group(name.clone()),
        }
    }
}

/// Encode a holder as its reference string.
pub fn encode(holder: &PermissionHolder) -> String {
    HolderId::from(holder).to_string()
}

/// Resolve a reference string to a holder.
///
/// Groups are only found if loaded; users are loaded from storage. Any
/// resolution failure is reported to `sender` and yields `Ok(None)`. Storage
/// errors are propagated.
pub async fn decode<R>(
    who: &str,
    resolver: &R,
    sender: &dyn Sender,
) -> Result<Option<PermissionHolder>, WebEditError>
where
    R: HolderResolver + ?Sized,
{
    match resolve(who, resolver).await? {
        Ok(holder) => Ok(Some(holder)),
        Err(failure) => {
            tracing::debug!(who, %failure, "holder reference did not resolve");
            sender.report(&failure);
            Ok(None)
        }
    }
}

async fn resolve<R>(
    who: &str,
    resolver: &R,
) -> Result<Result<PermissionHolder, ResolveFailure>, WebEditError>
where
    R: HolderResolver + ?Sized,
{
    let id = match HolderId::parse(who) {
        Ok(id) => id,
        Err(failure) => return Ok(Err(failure)),
    };

    match id {
        HolderId::Group(name) => Ok(resolver
            .loaded_group(&name)
            .ok_or(ResolveFailure::GroupNotExists(name))),
        HolderId::User(uuid) => {
            let user = resolver
                .load_user(uuid)
                .await
                .map_err(WebEditError::Storage)?;
            Ok(user.ok_or(ResolveFailure::UnableToLoad(uuid)))
        }
    }
}
