// ABOUTME: GistClient - uploads the editor document as a one-file gist and
// ABOUTME: fetches it back, following raw_url when the inline copy is truncated.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{GistConfig, PasteTransport, ReqwestTransport};
use crate::error::PasteError;

/// Name of the single file stored in every paste.
pub const FILE_NAME: &str = "luckperms-data.json";

/// Gist creation request.
#[derive(Debug, Serialize)]
struct CreateGist<'a> {
    description: &'a str,
    public: bool,
    files: Map<String, Value>,
}

/// Client for a gist-style paste service.
#[derive(Clone)]
pub struct GistClient {
    config: GistConfig,
    transport: Arc<dyn PasteTransport>,
}

impl GistClient {
    /// Create a client using a reqwest transport built from `config`.
    pub fn new(config: GistConfig) -> Result<Self, PasteError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self, PasteError> {
        Self::new(GistConfig::from_env()?)
    }

    /// Create a client with a custom transport.
    pub fn with_transport(config: GistConfig, transport: Arc<dyn PasteTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GistConfig {
        &self.config
    }

    /// Create a paste holding one file and return its id.
    pub async fn upload(&self, file_name: &str, content: &str) -> Result<String, PasteError> {
        let mut files = Map::new();
        files.insert(
            file_name.to_string(),
            serde_json::json!({ "content": content }),
        );
        let request = CreateGist {
            description: &self.config.description,
            public: self.config.public,
            files,
        };

        tracing::debug!(url = %self.config.api_url, bytes = content.len(), "creating paste");
        let body = self
            .transport
            .post_json(&self.config.api_url, &serde_json::to_value(&request)?)
            .await?;

        let response: Value = serde_json::from_str(&body)?;
        let id = required_str(&response, "id")?.to_string();
        tracing::info!(id = %id, "paste created");
        Ok(id)
    }

    /// Fetch a paste and parse the named file as a JSON object.
    ///
    /// When the service marks the inline content as truncated, the inline
    /// copy is ignored and the file is fetched from its `raw_url` instead,
    /// without service credentials.
    pub async fn download(&self, id: &str, file_name: &str) -> Result<Value, PasteError> {
        let url = self.config.paste_url(id);
        tracing::debug!(url = %url, "fetching paste");

        let body = self.transport.get(&url).await?;
        let metadata: Value = serde_json::from_str(&body)?;
        let descriptor = file_descriptor(&metadata, file_name)?;

        let truncated = descriptor
            .get("truncated")
            .ok_or_else(|| PasteError::MissingField(format!("files.{file_name}.truncated")))?
            .as_bool()
            .ok_or_else(|| PasteError::InvalidField {
                field: format!("files.{file_name}.truncated"),
                expected: "a boolean",
            })?;

        let document = if truncated {
            let raw_url = required_str(descriptor, "raw_url")?;
            tracing::debug!(url = %raw_url, "content truncated, fetching raw file");
            let raw = self.transport.get_raw(raw_url).await?;
            serde_json::from_str::<Value>(&raw)?
        } else {
            let content = required_str(descriptor, "content")?;
            serde_json::from_str::<Value>(content)?
        };

        if !document.is_object() {
            return Err(PasteError::InvalidField {
                field: file_name.to_string(),
                expected: "a JSON object",
            });
        }
        Ok(document)
    }
}

fn file_descriptor<'a>(metadata: &'a Value, file_name: &str) -> Result<&'a Value, PasteError> {
    let files = metadata
        .get("files")
        .ok_or_else(|| PasteError::MissingField("files".to_string()))?;
    if !files.is_object() {
        return Err(PasteError::InvalidField {
            field: "files".to_string(),
            expected: "an object",
        });
    }

    let descriptor = files
        .get(file_name)
        .ok_or_else(|| PasteError::MissingField(format!("files.{file_name}")))?;
    if !descriptor.is_object() {
        return Err(PasteError::InvalidField {
            field: format!("files.{file_name}"),
            expected: "an object",
        });
    }
    Ok(descriptor)
}

fn required_str<'a>(object: &'a Value, field: &str) -> Result<&'a str, PasteError> {
    object
        .get(field)
        .ok_or_else(|| PasteError::MissingField(field.to_string()))?
        .as_str()
        .ok_or_else(|| PasteError::InvalidField {
            field: field.to_string(),
            expected: "a string",
        })
}
