// ABOUTME: NodeModel - one permission grant with its scope, expiry and context.
// ABOUTME: Equality and hashing cover every field.

use crate::context::ContextSet;

/// The scope value meaning "applies everywhere".
pub const GLOBAL: &str = "global";

/// A single permission grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeModel {
    /// The permission key.
    pub permission: String,

    /// Whether the permission is granted (true) or negated (false).
    pub value: bool,

    /// Server scope, "global" when unscoped.
    pub server: String,

    /// World scope, "global" when unscoped.
    pub world: String,

    /// Expiry as a unix timestamp in seconds. 0 never expires.
    pub expiry: u64,

    /// Extra contexts the grant is restricted to.
    pub context: ContextSet,
}

impl NodeModel {
    /// Create a granted, global, permanent node.
    pub fn new(permission: impl Into<String>) -> Self {
        Self {
            permission: permission.into(),
            value: true,
            server: GLOBAL.to_string(),
            world: GLOBAL.to_string(),
            expiry: 0,
            context: ContextSet::new(),
        }
    }

    /// Set the value.
    pub fn value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    /// Set the server scope.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Set the world scope.
    pub fn world(mut self, world: impl Into<String>) -> Self {
        self.world = world.into();
        self
    }

    /// Set the expiry timestamp.
    pub fn expiry(mut self, expiry: u64) -> Self {
        self.expiry = expiry;
        self
    }

    /// Set the context.
    pub fn context(mut self, context: ContextSet) -> Self {
        self.context = context;
        self
    }

    pub fn is_temporary(&self) -> bool {
        self.expiry != 0
    }

    pub fn is_server_specific(&self) -> bool {
        self.server != GLOBAL
    }

    pub fn is_world_specific(&self) -> bool {
        self.world != GLOBAL
    }
}
