use crate::application::services::DispatchObserver;

/// Forwards dispatch events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&self, error: &anyhow::Error) {
        tracing::error!(error = %format!("{error:#}"), "lunch notification failed");
    }
}
