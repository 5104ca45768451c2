use async_trait::async_trait;

use crate::domain::models::Employee;

/// Delivers a lunch message over a concrete channel. Each call is a single
/// best-effort attempt.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send_email(&self, employee: &dyn Employee, template: &str) -> anyhow::Result<()>;

    async fn send_chat_message(
        &self,
        employee: &dyn Employee,
        template: &str,
    ) -> anyhow::Result<()>;
}
