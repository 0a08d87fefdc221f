//! Handler URL resolution

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::PersistenceError;

/// Maps a widget instance and handler name to a concrete endpoint URL
pub trait HandlerUrlResolver: Send + Sync {
    fn handler_url(&self, usage_id: &str, handler: &str) -> Result<Url, PersistenceError>;
}

/// Query-string style handler endpoint used by the course runtime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandlerEndpoint {
    /// Scheme and authority, e.g. `http://localhost:8080`
    pub origin: String,

    #[serde(default = "default_handler_path")]
    pub path: String,

    #[serde(default)]
    pub xsrf_token: Option<String>,
}

fn default_handler_path() -> String {
    "/modules/xblock_module/handler".to_string()
}

impl HandlerEndpoint {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            path: default_handler_path(),
            xsrf_token: None,
        }
    }

    pub fn with_xsrf_token(mut self, token: impl Into<String>) -> Self {
        self.xsrf_token = Some(token.into());
        self
    }
}

impl HandlerUrlResolver for HandlerEndpoint {
    fn handler_url(&self, usage_id: &str, handler: &str) -> Result<Url, PersistenceError> {
        let base = format!("{}{}", self.origin.trim_end_matches('/'), self.path);
        let mut params = vec![("usage", usage_id), ("handler", handler)];
        if let Some(token) = &self.xsrf_token {
            params.push(("xsrf_token", token.as_str()));
        }
        Url::parse_with_params(&base, &params)
            .map_err(|e| PersistenceError::InvalidUrl(format!("{}: {}", base, e)))
    }
}
