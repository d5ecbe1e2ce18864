// ABOUTME: Builds the outbound editor document - one holder at the top level
// ABOUTME: or several as tabs, plus upload metadata and known permissions.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use uuid::Uuid;

use crate::holder::{PermissionHolder, Sender, identifier};
use crate::node;

/// One holder's block in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderData {
    pub who: String,
    pub who_friendly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_uuid: Option<String>,
    pub nodes: serde_json::Value,
}

impl From<&PermissionHolder> for HolderData {
    fn from(holder: &PermissionHolder) -> Self {
        HolderData {
            who: identifier::encode(holder),
            who_friendly: holder.friendly_name(),
            who_uuid: holder.uuid().map(|uuid| uuid.to_string()),
            nodes: node::codec::encode_all(holder.nodes()),
        }
    }
}

/// Holder data: a single block written inline, or a list of tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PayloadBody {
    Single(HolderData),
    Tabs { tabs: Vec<HolderData> },
}

/// The document uploaded for the web editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangePayload {
    pub cmd_alias: String,
    pub uploaded_by: String,
    pub uploaded_by_uuid: String,
    /// Build time, epoch milliseconds.
    pub time: u64,
    #[serde(flatten)]
    pub body: PayloadBody,
    pub known_permissions: Vec<String>,
}

impl ExchangePayload {
    /// Start building a payload for the given command alias and uploader.
    pub fn builder(
        cmd_alias: impl Into<String>,
        uploaded_by: impl Into<String>,
        uploaded_by_uuid: Uuid,
    ) -> PayloadBuilder {
        PayloadBuilder::new(cmd_alias, uploaded_by, uploaded_by_uuid)
    }

    /// Start building a payload uploaded by `sender`.
    pub fn builder_for(cmd_alias: impl Into<String>, sender: &dyn Sender) -> PayloadBuilder {
        PayloadBuilder::new(cmd_alias, sender.name(), sender.uuid())
    }

    /// Serialize to the JSON text that gets uploaded.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Builder for [`ExchangePayload`].
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    cmd_alias: String,
    uploaded_by: String,
    uploaded_by_uuid: Uuid,
    time: Option<u64>,
    holders: Vec<HolderData>,
    known_permissions: Vec<String>,
}

impl PayloadBuilder {
    pub fn new(
        cmd_alias: impl Into<String>,
        uploaded_by: impl Into<String>,
        uploaded_by_uuid: Uuid,
    ) -> Self {
        Self {
            cmd_alias: cmd_alias.into(),
            uploaded_by: uploaded_by.into(),
            uploaded_by_uuid,
            time: None,
            holders: Vec::new(),
            known_permissions: Vec::new(),
        }
    }

    /// Add a holder. Holders keep their insertion order.
    pub fn holder(mut self, holder: &PermissionHolder) -> Self {
        self.holders.push(HolderData::from(holder));
        self
    }

    pub fn holders<'a>(mut self, holders: impl IntoIterator<Item = &'a PermissionHolder>) -> Self {
        self.holders.extend(holders.into_iter().map(HolderData::from));
        self
    }

    /// Snapshot of every permission the server knows about, for autocomplete.
    /// Copied as given, replacing any earlier snapshot.
    pub fn known_permissions<S: Into<String>>(mut self, perms: impl IntoIterator<Item = S>) -> Self {
        self.known_permissions = perms.into_iter().map(Into::into).collect();
        self
    }

    /// Override the timestamp instead of reading the clock at build time.
    pub fn time(mut self, millis: u64) -> Self {
        self.time = Some(millis);
        self
    }

    /// Build the payload.
    ///
    /// # Panics
    ///
    /// Panics if no holder was added.
    pub fn build(self) -> ExchangePayload {
        assert!(!self.holders.is_empty(), "holders is empty");

        let mut holders = self.holders;
        let body = if holders.len() == 1 {
            PayloadBody::Single(holders.remove(0))
        } else {
            PayloadBody::Tabs { tabs: holders }
        };

        ExchangePayload {
            cmd_alias: self.cmd_alias,
            uploaded_by: self.uploaded_by,
            uploaded_by_uuid: self.uploaded_by_uuid.to_string(),
            time: self.time.unwrap_or_else(now_millis),
            body,
            known_permissions: self.known_permissions,
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
