use async_trait::async_trait;

use crate::{
    application::services::NotificationGateway,
    domain::{
        errors::SendError,
        models::{Employee, NotificationChannel},
    },
};

/// Gateway that writes each message to the log instead of a real mail or
/// chat backend. Sends fail when the employee has no address on the channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotificationGateway;

impl LoggingNotificationGateway {
    pub fn new() -> Self {
        Self
    }

    fn deliver(
        &self,
        channel: NotificationChannel,
        employee: &dyn Employee,
        template: &str,
    ) -> anyhow::Result<()> {
        let address = employee
            .contact_for(channel)
            .ok_or_else(|| SendError::MissingContact {
                channel,
                employee: employee.name().to_string(),
            })?;

        tracing::info!(
            channel = %channel,
            employee = employee.name(),
            address,
            "sending '{}'",
            template
        );
        Ok(())
    }
}

#[async_trait]
impl NotificationGateway for LoggingNotificationGateway {
    async fn send_email(&self, employee: &dyn Employee, template: &str) -> anyhow::Result<()> {
        self.deliver(NotificationChannel::Email, employee, template)
    }

    async fn send_chat_message(
        &self,
        employee: &dyn Employee,
        template: &str,
    ) -> anyhow::Result<()> {
        self.deliver(NotificationChannel::Chat, employee, template)
    }
}
