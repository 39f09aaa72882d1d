//! Shutdown coordination for embedded servers.
//!
//! The binary never triggers this; it serves until the process is killed.

use std::future::Future;
use tokio::sync::broadcast;

/// Coordinator for stopping one or more running servers.
///
/// Provides a broadcast channel that serving tasks can subscribe to.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// A future that resolves once [`Shutdown::trigger`] is called.
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of servers still waiting for the signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signalled_resolves_on_trigger() {
        let shutdown = Shutdown::new();
        let signal = shutdown.signalled();
        assert_eq!(shutdown.receiver_count(), 1);

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), signal)
            .await
            .expect("signal should resolve after trigger");
    }

    #[tokio::test]
    async fn test_signalled_pending_without_trigger() {
        let shutdown = Shutdown::new();
        let signal = shutdown.signalled();
        assert!(tokio::time::timeout(Duration::from_millis(50), signal).await.is_err());
    }
}
