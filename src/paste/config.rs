// ABOUTME: GistConfig - endpoint, credentials and HTTP settings for the
// ABOUTME: paste service, with defaults and environment overrides.

use std::time::Duration;

use crate::error::PasteError;

pub const DEFAULT_API_URL: &str = "https://api.github.com/gists";
pub const DEFAULT_EDITOR_URL: &str = "https://luckperms.github.io/editor/";
pub const DEFAULT_DESCRIPTION: &str = "LuckPerms Web Editor Data";

/// Settings for the gist-backed paste client.
#[derive(Debug, Clone)]
pub struct GistConfig {
    /// Base URL; pastes are created here and fetched from `<api_url>/<id>`.
    pub api_url: String,
    pub description: String,
    /// Listed publicly, or unlisted.
    pub public: bool,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
    /// Web editor base URL; the paste id is appended to it.
    pub editor_url: String,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            public: false,
            token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("webedit/{}", env!("CARGO_PKG_VERSION")),
            editor_url: DEFAULT_EDITOR_URL.to_string(),
        }
    }
}

impl GistConfig {
    /// Build a config from environment variables, starting from the defaults.
    ///
    /// Reads `WEBEDIT_GIST_API_URL`, `GITHUB_TOKEN`, `WEBEDIT_GIST_PUBLIC`,
    /// `WEBEDIT_HTTP_TIMEOUT_SECS` and `WEBEDIT_EDITOR_URL`.
    pub fn from_env() -> Result<Self, PasteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GistConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PasteError> {
        let mut config = Self::default();

        if let Some(url) = lookup("WEBEDIT_GIST_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(token) = lookup("GITHUB_TOKEN").filter(|t| !t.is_empty()) {
            config.token = Some(token);
        }
        if let Some(public) = lookup("WEBEDIT_GIST_PUBLIC") {
            config.public = public.parse().map_err(|_| {
                PasteError::Configuration(format!("WEBEDIT_GIST_PUBLIC is not a boolean: {public}"))
            })?;
        }
        if let Some(secs) = lookup("WEBEDIT_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                PasteError::Configuration(format!(
                    "WEBEDIT_HTTP_TIMEOUT_SECS is not a number of seconds: {secs}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(url) = lookup("WEBEDIT_EDITOR_URL") {
            config.editor_url = url;
        }

        Ok(config)
    }

    /// URL of a single paste.
    pub fn paste_url(&self, id: &str) -> String {
        format!("{}/{}", self.api_url, id)
    }

    /// Link that opens the given paste in the web editor.
    pub fn editor_link(&self, id: &str) -> String {
        if self.editor_url.ends_with('/') || self.editor_url.ends_with('#') {
            format!("{}{}", self.editor_url, id)
        } else {
            format!("{}/{}", self.editor_url, id)
        }
    }
}
