//! Graceful stop fan-out.

use tokio::sync::broadcast;

/// One trigger, any number of listeners. The HTTP server holds a receiver;
/// `main` fires it on SIGINT/SIGTERM, tests fire it directly.
pub struct Shutdown(broadcast::Sender<()>);

impl Shutdown {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(broadcast::channel(1).0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.0.subscribe()
    }

    /// No-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.0.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_without_subscribers() {
        Shutdown::new().trigger();
    }
}
