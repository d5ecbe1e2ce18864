// ABOUTME: Tests for GistClient against a scripted in-memory transport.
// ABOUTME: Covers upload, inline download, the truncation path and failures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::error::PasteError;

const API: &str = "https://paste.test/gists";

/// A transport that answers from a fixed URL table and records every call.
#[derive(Default)]
struct ScriptedTransport {
    responses: HashMap<String, Result<String, u16>>,
    calls: Mutex<Vec<String>>,
    raw_calls: Mutex<Vec<String>>,
    posted: Mutex<Vec<serde_json::Value>>,
}

impl ScriptedTransport {
    fn respond(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses.insert(url.to_string(), Ok(body.into()));
        self
    }

    fn fail(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Err(status));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn raw_calls(&self) -> Vec<String> {
        self.raw_calls.lock().unwrap().clone()
    }

    fn answer(&self, url: &str) -> Result<String, PasteError> {
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(PasteError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
            None => Err(PasteError::Api {
                status: 404,
                message: format!("no route for {url}"),
            }),
        }
    }
}

#[async_trait]
impl PasteTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, PasteError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.answer(url)
    }

    async fn get_raw(&self, url: &str) -> Result<String, PasteError> {
        self.raw_calls.lock().unwrap().push(url.to_string());
        self.answer(url)
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, PasteError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.posted.lock().unwrap().push(body.clone());
        self.answer(url)
    }
}

fn client(transport: &Arc<ScriptedTransport>) -> GistClient {
    let config = GistConfig {
        api_url: API.to_string(),
        ..Default::default()
    };
    GistClient::with_transport(config, transport.clone())
}

fn inline_gist(content: &str) -> String {
    json!({
        "id": "abc123",
        "files": {
            FILE_NAME: {
                "filename": FILE_NAME,
                "truncated": false,
                "content": content,
                "raw_url": "https://raw.test/abc123/luckperms-data.json"
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_upload_returns_id() {
    let transport = Arc::new(ScriptedTransport::default().respond(API, r#"{"id":"abc123"}"#));

    let id = client(&transport)
        .upload(FILE_NAME, r#"{"who":"group/admin"}"#)
        .await
        .unwrap();

    assert_eq!(id, "abc123");
    let posted = transport.posted.lock().unwrap()[0].clone();
    assert_eq!(posted["description"], "LuckPerms Web Editor Data");
    assert_eq!(posted["public"], false);
    assert_eq!(
        posted["files"][FILE_NAME]["content"],
        r#"{"who":"group/admin"}"#
    );
}

#[tokio::test]
async fn test_upload_failure_is_fatal() {
    let transport = Arc::new(ScriptedTransport::default().fail(API, 401));

    let result = client(&transport).upload(FILE_NAME, "{}").await;

    assert!(matches!(result, Err(PasteError::Api { status: 401, .. })));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_upload_without_id() {
    let transport = Arc::new(ScriptedTransport::default().respond(API, r#"{"url":"x"}"#));

    let result = client(&transport).upload(FILE_NAME, "{}").await;
    assert!(matches!(result, Err(PasteError::MissingField(f)) if f == "id"));
}

#[tokio::test]
async fn test_download_inline() {
    let url = format!("{API}/abc123");
    let transport = Arc::new(
        ScriptedTransport::default().respond(&url, inline_gist(r#"{"who":"group/admin","nodes":[]}"#)),
    );

    let doc = client(&transport).download("abc123", FILE_NAME).await.unwrap();

    assert_eq!(doc, json!({"who": "group/admin", "nodes": []}));
    assert_eq!(transport.calls(), vec![url]);
    assert!(transport.raw_calls().is_empty());
}

#[tokio::test]
async fn test_download_truncated_follows_raw_url() {
    let url = format!("{API}/abc123");
    let raw_url = "https://raw.test/abc123/luckperms-data.json";
    let metadata = json!({
        "files": {
            FILE_NAME: {
                "truncated": true,
                "content": "{\"who\":\"group/adm",
                "raw_url": raw_url
            }
        }
    });
    let transport = Arc::new(
        ScriptedTransport::default()
            .respond(&url, metadata.to_string())
            .respond(raw_url, r#"{"who":"group/admin","nodes":[{"permission":"*"}]}"#),
    );

    let doc = client(&transport).download("abc123", FILE_NAME).await.unwrap();

    assert_eq!(doc["who"], "group/admin");
    assert_eq!(doc["nodes"][0]["permission"], "*");
    assert_eq!(transport.calls(), vec![url]);
    assert_eq!(transport.raw_calls(), vec![raw_url.to_string()]);
}

#[tokio::test]
async fn test_download_truncated_raw_failure() {
    let url = format!("{API}/abc123");
    let raw_url = "https://raw.test/abc123/luckperms-data.json";
    let metadata = json!({
        "files": { FILE_NAME: { "truncated": true, "content": "{}", "raw_url": raw_url } }
    });
    let transport = Arc::new(
        ScriptedTransport::default()
            .respond(&url, metadata.to_string())
            .fail(raw_url, 502),
    );

    let result = client(&transport).download("abc123", FILE_NAME).await;
    assert!(matches!(result, Err(PasteError::Api { status: 502, .. })));
}

#[tokio::test]
async fn test_download_missing_files() {
    let url = format!("{API}/abc123");
    let transport = Arc::new(ScriptedTransport::default().respond(&url, r#"{"id":"abc123"}"#));

    let result = client(&transport).download("abc123", FILE_NAME).await;
    assert!(matches!(result, Err(PasteError::MissingField(f)) if f == "files"));
}

#[tokio::test]
async fn test_download_missing_file_entry() {
    let url = format!("{API}/abc123");
    let body = json!({"files": {"other.txt": {"truncated": false, "content": "{}"}}});
    let transport = Arc::new(ScriptedTransport::default().respond(&url, body.to_string()));

    let result = client(&transport).download("abc123", FILE_NAME).await;
    assert!(matches!(result, Err(PasteError::MissingField(_))));
}

#[tokio::test]
async fn test_download_malformed_content() {
    let url = format!("{API}/abc123");
    let transport = Arc::new(ScriptedTransport::default().respond(&url, inline_gist("{not json")));

    let result = client(&transport).download("abc123", FILE_NAME).await;
    assert!(matches!(result, Err(PasteError::Deserialize(_))));
}

#[tokio::test]
async fn test_download_non_object_document() {
    let url = format!("{API}/abc123");
    let transport = Arc::new(ScriptedTransport::default().respond(&url, inline_gist("[1,2]")));

    let result = client(&transport).download("abc123", FILE_NAME).await;
    assert!(matches!(result, Err(PasteError::InvalidField { .. })));
}

#[tokio::test]
async fn test_download_unknown_paste() {
    let transport = Arc::new(ScriptedTransport::default());

    let result = client(&transport).download("missing", FILE_NAME).await;
    assert!(matches!(result, Err(PasteError::Api { status: 404, .. })));
}
