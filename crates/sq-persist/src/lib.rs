//! Position persistence for sequence widgets
//!
//! Every user-driven position change is reported to the host runtime's
//! `on_select` handler. Reporting is best effort: requests are spawned and
//! never awaited by the navigation path, and their outcome only reaches the log.

pub mod client;
pub mod resolver;
pub mod transport;

use thiserror::Error;

// Re-exports
pub use client::{PersistenceClient, PersistenceSubscriber, SelectPayload, SELECT_HANDLER};
pub use resolver::{HandlerEndpoint, HandlerUrlResolver};
pub use transport::{HttpTransport, LogTransport, PositionTransport};

/// Errors that can occur while reporting a position
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid handler URL: {0}")]
    InvalidUrl(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Handler rejected position update with status {status}")]
    Rejected { status: u16 },
}
