//! Fire-and-forget position notifications

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sq_core::{NavigationContext, NavigationSubscriber};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::resolver::HandlerUrlResolver;
use crate::transport::PositionTransport;

/// Runtime handler that records the selected page
pub const SELECT_HANDLER: &str = "on_select";

/// Body of an `on_select` request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectPayload {
    pub position: usize,
}

/// Reports position changes of one widget instance to its runtime handler
#[derive(Clone)]
pub struct PersistenceClient {
    usage_id: String,
    resolver: Arc<dyn HandlerUrlResolver>,
    transport: Arc<dyn PositionTransport>,
    runtime: Handle,
}

impl PersistenceClient {
    pub fn new(
        usage_id: impl Into<String>,
        resolver: Arc<dyn HandlerUrlResolver>,
        transport: Arc<dyn PositionTransport>,
        runtime: Handle,
    ) -> Self {
        Self {
            usage_id: usage_id.into(),
            resolver,
            transport,
            runtime,
        }
    }

    pub fn usage_id(&self) -> &str {
        &self.usage_id
    }

    /// Spawn one `on_select` request for `position` and return immediately.
    ///
    /// The request is best effort: failures are logged and dropped, nothing is
    /// retried and no in-memory state depends on the outcome. The returned
    /// handle may be dropped; it is only useful for waiting in tests.
    pub fn notify(&self, position: usize) -> JoinHandle<()> {
        let payload = SelectPayload { position };
        let url = self.resolver.handler_url(&self.usage_id, SELECT_HANDLER);
        let transport = self.transport.clone();
        let usage_id = self.usage_id.clone();

        self.runtime.spawn(async move {
            let result = match url {
                Ok(url) => transport.send(url, payload).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => tracing::debug!("Persisted position {} for {}", position, usage_id),
                Err(e) => tracing::warn!(
                    "Failed to persist position {} for {}: {}",
                    position,
                    usage_id,
                    e
                ),
            }
        })
    }
}

/// Subscriber that persists every user-driven position change
pub struct PersistenceSubscriber {
    client: PersistenceClient,
}

impl PersistenceSubscriber {
    pub fn new(client: PersistenceClient) -> Self {
        Self { client }
    }
}

impl NavigationSubscriber for PersistenceSubscriber {
    fn on_navigation_change(&self, context: &NavigationContext) {
        if !context.is_user_driven() {
            return;
        }
        // Deliberately not awaited
        drop(self.client.notify(context.position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::HandlerEndpoint;
    use crate::PersistenceError;
    use async_trait::async_trait;
    use reqwest::Url;
    use sq_core::{MemoryLocation, NavigationController, SequenceAttributes, StepOrigin};
    use tokio::sync::mpsc;

    struct ChannelTransport {
        tx: mpsc::UnboundedSender<(Url, SelectPayload)>,
    }

    #[async_trait]
    impl PositionTransport for ChannelTransport {
        async fn send(&self, url: Url, payload: SelectPayload) -> Result<(), PersistenceError> {
            let _ = self.tx.send((url, payload));
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl PositionTransport for FailingTransport {
        async fn send(&self, _url: Url, _payload: SelectPayload) -> Result<(), PersistenceError> {
            Err(PersistenceError::Rejected { status: 500 })
        }
    }

    fn channel_client() -> (PersistenceClient, mpsc::UnboundedReceiver<(Url, SelectPayload)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = PersistenceClient::new(
            "seq-1",
            Arc::new(HandlerEndpoint::new("http://localhost:8080")),
            Arc::new(ChannelTransport { tx }),
            Handle::current(),
        );
        (client, rx)
    }

    #[test]
    fn test_payload_shape() {
        let body = serde_json::to_string(&SelectPayload { position: 2 }).unwrap();
        assert_eq!(body, r#"{"position":2}"#);
    }

    #[tokio::test]
    async fn test_notify_posts_to_on_select() {
        let (client, mut rx) = channel_client();
        client.notify(4).await.unwrap();

        let (url, payload) = rx.recv().await.unwrap();
        assert_eq!(payload, SelectPayload { position: 4 });
        assert_eq!(
            url.query(),
            Some("usage=seq-1&handler=on_select")
        );
    }

    #[tokio::test]
    async fn test_failures_are_swallowed() {
        let client = PersistenceClient::new(
            "seq-1",
            Arc::new(HandlerEndpoint::new("http://localhost:8080")),
            Arc::new(FailingTransport),
            Handle::current(),
        );
        assert!(client.notify(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_subscriber_notifies_once_per_move_and_skips_initial() {
        let (client, mut rx) = channel_client();
        let subscriber = Arc::new(PersistenceSubscriber::new(client));

        let location = Arc::new(MemoryLocation::new("unit?unit=1"));
        let controller =
            NavigationController::new(&SequenceAttributes::new(3), location).unwrap();
        controller.add_subscriber(subscriber.clone());

        controller.initialize().unwrap();
        controller.next(StepOrigin::Strip).unwrap();
        controller.next(StepOrigin::Footer).unwrap();
        // Boundary with no adjacent unit: nothing to persist
        controller.next(StepOrigin::Footer).unwrap();
        controller.jump_to(0).unwrap();

        let mut positions = Vec::new();
        for _ in 0..3 {
            let (_, payload) = rx.recv().await.unwrap();
            positions.push(payload.position);
        }
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 1, 2]);

        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
