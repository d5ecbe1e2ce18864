// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use webedit::prelude::*;` to get started quickly.

pub use crate::context::ContextSet;
pub use crate::editor::{AppliedEdit, EditorSession, HolderEdit, WebEditor};
pub use crate::error::{DocumentError, NodeDecodeError, PasteError, WebEditError};
pub use crate::holder::{HolderId, HolderResolver, PermissionHolder, ResolveFailure, Sender};
pub use crate::node::{GLOBAL, NodeModel};
pub use crate::paste::{FILE_NAME, GistClient, GistConfig, PasteTransport, ReqwestTransport};
pub use crate::payload::{ExchangePayload, HolderData, PayloadBody, PayloadBuilder};
