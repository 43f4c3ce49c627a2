use tokio::sync::oneshot;
use tracing::warn;

/// The single terminal outcome of a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    Finished,
    Error(String),
}

/// Sending half of a launch result. Consumed by whichever report is made,
/// so an attempt can't report twice.
#[derive(Debug)]
pub struct LaunchReporter {
    tx: oneshot::Sender<LaunchEvent>,
}

impl LaunchReporter {
    pub fn finished(self) {
        self.send(LaunchEvent::Finished);
    }

    pub fn error(self, message: impl Into<String>) {
        self.send(LaunchEvent::Error(message.into()));
    }

    fn send(self, event: LaunchEvent) {
        if self.tx.send(event).is_err() {
            warn!("Launch result dropped, nobody is waiting for it");
        }
    }
}

/// Receiving half of a launch result.
#[derive(Debug)]
pub struct LaunchHandle {
    rx: oneshot::Receiver<LaunchEvent>,
}

impl LaunchHandle {
    pub fn channel() -> (LaunchReporter, LaunchHandle) {
        let (tx, rx) = oneshot::channel();
        (LaunchReporter { tx }, LaunchHandle { rx })
    }

    /// A handle that already holds `event`.
    pub fn ready(event: LaunchEvent) -> Self {
        let (reporter, handle) = Self::channel();
        reporter.send(event);
        handle
    }

    /// Resolves to the attempt's one event. A reporter dropped without
    /// reporting counts as an error.
    pub async fn wait(self) -> LaunchEvent {
        self.rx.await.unwrap_or_else(|_| {
            LaunchEvent::Error("The launcher stopped without reporting a result".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_finished_is_delivered() {
        let (reporter, handle) = LaunchHandle::channel();
        tokio::spawn(async move { reporter.finished() });
        assert_eq!(handle.wait().await, LaunchEvent::Finished);
    }

    #[tokio::test]
    async fn test_error_message_is_preserved() {
        let (reporter, handle) = LaunchHandle::channel();
        reporter.error("Network unreachable");
        assert_eq!(
            handle.wait().await,
            LaunchEvent::Error("Network unreachable".to_string())
        );
    }

    #[tokio::test]
    async fn test_dropped_reporter_is_an_error() {
        let (reporter, handle) = LaunchHandle::channel();
        drop(reporter);
        assert!(matches!(handle.wait().await, LaunchEvent::Error(_)));
    }
}
