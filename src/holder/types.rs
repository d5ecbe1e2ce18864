// ABOUTME: PermissionHolder - a user or group owning a list of grants.
// ABOUTME: Tagged variant with shared accessors for name and nodes.

use uuid::Uuid;

use crate::node::NodeModel;

/// An entity that owns permission grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionHolder {
    User {
        uuid: Uuid,
        /// Last known username, if any.
        username: Option<String>,
        nodes: Vec<NodeModel>,
    },
    Group {
        name: String,
        nodes: Vec<NodeModel>,
    },
}

impl PermissionHolder {
    /// Create a user with no grants.
    pub fn user(uuid: Uuid, username: Option<String>) -> Self {
        Self::User {
            uuid,
            username,
            nodes: Vec::new(),
        }
    }

    /// Create a group with no grants.
    pub fn group(name: impl Into<String>) -> Self {
        Self::Group {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Append a grant (builder style).
    pub fn node(mut self, node: NodeModel) -> Self {
        self.nodes_mut().push(node);
        self
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }

    /// The user's UUID, or None for a group.
    pub fn uuid(&self) -> Option<Uuid> {
        match self {
            Self::User { uuid, .. } => Some(*uuid),
            Self::Group { .. } => None,
        }
    }

    /// Name shown to humans: the username (falling back to the UUID) or the group name.
    pub fn friendly_name(&self) -> String {
        match self {
            Self::User { uuid, username, .. } => {
                username.clone().unwrap_or_else(|| uuid.to_string())
            }
            Self::Group { name, .. } => name.clone(),
        }
    }

    pub fn nodes(&self) -> &[NodeModel] {
        match self {
            Self::User { nodes, .. } | Self::Group { nodes, .. } => nodes,
        }
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<NodeModel> {
        match self {
            Self::User { nodes, .. } | Self::Group { nodes, .. } => nodes,
        }
    }

    /// Replace every grant with the given set, in a stable order.
    pub fn set_nodes(&mut self, nodes: impl IntoIterator<Item = NodeModel>) {
        let mut nodes: Vec<_> = nodes.into_iter().collect();
        nodes.sort();
        *self.nodes_mut() = nodes;
    }
}
