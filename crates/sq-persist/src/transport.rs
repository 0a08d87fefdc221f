//! Transports carrying position updates to the runtime

use async_trait::async_trait;
use reqwest::Url;

use crate::client::SelectPayload;
use crate::PersistenceError;

/// Sends one position update to a handler URL
#[async_trait]
pub trait PositionTransport: Send + Sync {
    async fn send(&self, url: Url, payload: SelectPayload) -> Result<(), PersistenceError>;
}

/// POSTs the payload as JSON
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PositionTransport for HttpTransport {
    async fn send(&self, url: Url, payload: SelectPayload) -> Result<(), PersistenceError> {
        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::Rejected { status: status.as_u16() });
        }
        Ok(())
    }
}

/// Writes updates to the log instead of the network (offline hosts)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

#[async_trait]
impl PositionTransport for LogTransport {
    async fn send(&self, url: Url, payload: SelectPayload) -> Result<(), PersistenceError> {
        let body = serde_json::to_string(&payload)?;
        tracing::info!("POST {} {}", url, body);
        Ok(())
    }
}
