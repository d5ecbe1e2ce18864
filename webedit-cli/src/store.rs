// ABOUTME: JSON-file holder store - loads users and groups for the CLI and
// ABOUTME: acts as the resolver when edits are applied.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use webedit::holder::identifier;
use webedit::node::codec;
use webedit::prelude::*;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(default)]
    nodes: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GroupRecord {
    name: String,
    #[serde(default)]
    nodes: Vec<serde_json::Value>,
}

/// Holders kept in a JSON file, fully loaded in memory.
#[derive(Debug)]
pub struct HolderStore {
    path: PathBuf,
    holders: Vec<PermissionHolder>,
}

impl HolderStore {
    /// Load the store. A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file: StoreFile = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        } else {
            StoreFile::default()
        };

        let mut holders = Vec::with_capacity(file.users.len() + file.groups.len());
        for user in file.users {
            let mut holder = PermissionHolder::user(user.uuid, user.username);
            holder.set_nodes(codec::decode_all(&user.nodes));
            holders.push(holder);
        }
        for group in file.groups {
            let mut holder = PermissionHolder::group(group.name);
            holder.set_nodes(codec::decode_all(&group.nodes));
            holders.push(holder);
        }

        Ok(Self { path, holders })
    }

    /// Write every holder back to the file.
    pub fn save(&self) -> Result<()> {
        let mut file = StoreFile::default();
        for holder in &self.holders {
            let nodes = holder.nodes().iter().map(codec::encode).collect();
            match holder {
                PermissionHolder::User { uuid, username, .. } => file.users.push(UserRecord {
                    uuid: *uuid,
                    username: username.clone(),
                    nodes,
                }),
                PermissionHolder::Group { name, .. } => file.groups.push(GroupRecord {
                    name: name.clone(),
                    nodes,
                }),
            }
        }

        let text = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn holders(&self) -> &[PermissionHolder] {
        &self.holders
    }

    /// Holders matching the given identifiers, or every holder when none are given.
    pub fn select(&self, targets: &[String]) -> Result<Vec<&PermissionHolder>> {
        if targets.is_empty() {
            return Ok(self.holders.iter().collect());
        }

        targets
            .iter()
            .map(|who| {
                self.holders
                    .iter()
                    .find(|h| identifier::encode(h) == *who)
                    .with_context(|| format!("no holder '{who}' in store"))
            })
            .collect()
    }

    /// Every permission granted by any holder, sorted.
    pub fn known_permissions(&self) -> Vec<String> {
        let perms: BTreeSet<&str> = self
            .holders
            .iter()
            .flat_map(|h| h.nodes().iter().map(|n| n.permission.as_str()))
            .collect();
        perms.into_iter().map(str::to_string).collect()
    }

    /// Replace the stored holder with the same identity.
    pub fn replace(&mut self, updated: PermissionHolder) {
        let id = HolderId::from(&updated);
        match self.holders.iter_mut().find(|h| HolderId::from(&**h) == id) {
            Some(existing) => *existing = updated,
            None => self.holders.push(updated),
        }
    }
}

#[async_trait]
impl HolderResolver for HolderStore {
    fn loaded_group(&self, name: &str) -> Option<PermissionHolder> {
        self.holders
            .iter()
            .find(|h| matches!(h, PermissionHolder::Group { name: n, .. } if n == name))
            .cloned()
    }

    async fn load_user(&self, uuid: Uuid) -> Result<Option<PermissionHolder>, anyhow::Error> {
        Ok(self
            .holders
            .iter()
            .find(|h| h.uuid() == Some(uuid))
            .cloned())
    }
}
