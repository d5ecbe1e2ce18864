// ABOUTME: WebEditor - ties payload, paste client and parser together into
// ABOUTME: the two user-facing operations: open an editor and apply its edits.

use std::collections::HashSet;

use super::parser::{self, HolderEdit};
use crate::error::WebEditError;
use crate::holder::{HolderResolver, PermissionHolder, Sender, identifier};
use crate::node::NodeModel;
use crate::paste::{FILE_NAME, GistClient};
use crate::payload::ExchangePayload;

/// An uploaded editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    /// Paste id, needed to apply the edits later.
    pub id: String,
    /// Link that opens the editor on this paste.
    pub url: String,
}

/// Edits for a resolved holder, ready to be applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdit {
    pub holder: PermissionHolder,
    pub nodes: HashSet<NodeModel>,
}

impl AppliedEdit {
    /// The holder with its nodes replaced by the edited set.
    pub fn into_updated(self) -> PermissionHolder {
        let mut holder = self.holder;
        holder.set_nodes(self.nodes);
        holder
    }
}

/// Publishes payloads to the paste service and reads edits back.
#[derive(Clone)]
pub struct WebEditor {
    client: GistClient,
}

impl WebEditor {
    pub fn new(client: GistClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GistClient {
        &self.client
    }

    /// Upload a payload and return the session to hand to the user.
    pub async fn open(&self, payload: &ExchangePayload) -> Result<EditorSession, WebEditError> {
        let content = payload.to_json_string()?;
        let id = self.client.upload(FILE_NAME, &content).await?;
        let url = self.client.config().editor_link(&id);
        Ok(EditorSession { id, url })
    }

    /// Download a paste and split it into per-holder edits, unresolved.
    pub async fn fetch(&self, id: &str) -> Result<Vec<HolderEdit>, WebEditError> {
        let document = self.client.download(id, FILE_NAME).await?;
        Ok(parser::parse_document(&document)?)
    }

    /// Download a paste and resolve each edited holder.
    ///
    /// Holders that do not resolve are reported to `sender` and left out;
    /// storage errors abort the whole operation.
    pub async fn apply<R>(
        &self,
        id: &str,
        resolver: &R,
        sender: &dyn Sender,
    ) -> Result<Vec<AppliedEdit>, WebEditError>
    where
        R: HolderResolver + ?Sized,
    {
        let edits = self.fetch(id).await?;

        let mut applied = Vec::with_capacity(edits.len());
        for edit in edits {
            let Some(holder) = identifier::decode(&edit.who, resolver, sender).await? else {
                continue;
            };
            tracing::debug!(who = %edit.who, nodes = edit.nodes.len(), "resolved edited holder");
            applied.push(AppliedEdit {
                holder,
                nodes: edit.nodes,
            });
        }

        Ok(applied)
    }
}
