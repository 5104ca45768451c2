/// Receives the events of a dispatch run.
pub trait DispatchObserver: Send + Sync {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn error(&self, error: &anyhow::Error);
}
