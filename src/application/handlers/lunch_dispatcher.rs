use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::services::{Clock, DispatchObserver, NotificationGateway},
    domain::{
        errors::{DispatchError, SendError},
        models::{DispatchOutcome, DispatchReport, Employee, LunchTemplates, NotificationChannel},
        repositories::EmployeeDirectory,
    },
};

/// Tells every working employee of an office that lunch is ready, over the
/// channel each of them prefers.
pub struct LunchNotifier {
    gateway: Arc<dyn NotificationGateway>,
    directory: Arc<dyn EmployeeDirectory>,
    observer: Arc<dyn DispatchObserver>,
    clock: Arc<dyn Clock>,
    templates: LunchTemplates,
    send_timeout: Option<Duration>,
}

impl LunchNotifier {
    pub fn new(
        gateway: Arc<dyn NotificationGateway>,
        directory: Arc<dyn EmployeeDirectory>,
        observer: Arc<dyn DispatchObserver>,
        clock: Arc<dyn Clock>,
        templates: LunchTemplates,
    ) -> Self {
        Self {
            gateway,
            directory,
            observer,
            clock,
            templates,
            send_timeout: None,
        }
    }

    /// Bounds every gateway call. An elapsed deadline counts as a failed send.
    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = Some(timeout);
        self
    }

    /// Runs one dispatch. Only a failure to list employees aborts the run;
    /// failed sends are reported to the observer and recorded in the report.
    pub async fn run_dispatch(&self) -> Result<DispatchReport, DispatchError> {
        let now = self.clock.now();
        let template = self.templates.select(now);
        self.observer.info(&format!("Using template: {template}"));

        let employees = self
            .directory
            .employees_in_office()
            .await
            .map_err(DispatchError::Directory)?;

        let today = now.date();
        let mut report = DispatchReport::new(template);

        for employee in &employees {
            if !employee.is_working_on(today) {
                // out sick or on vacation
                self.observer
                    .debug(&format!("Skipping employee {}", employee.name()));
                report.record(employee.name(), DispatchOutcome::NotWorking);
                continue;
            }

            let outcome = self.notify(employee.as_ref(), template).await;
            report.record(employee.name(), outcome);
        }

        self.observer.info(&report.summary());
        Ok(report)
    }

    async fn notify(&self, employee: &dyn Employee, template: &str) -> DispatchOutcome {
        let Some(channel) = employee.notification_preference() else {
            return DispatchOutcome::Unrouted;
        };

        match self.send(employee, channel, template).await {
            Ok(()) => DispatchOutcome::Delivered { channel },
            Err(err) => {
                self.observer.error(&err);
                DispatchOutcome::Failed {
                    channel,
                    reason: format!("{err:#}"),
                }
            }
        }
    }

    async fn send(
        &self,
        employee: &dyn Employee,
        channel: NotificationChannel,
        template: &str,
    ) -> anyhow::Result<()> {
        let send = async {
            match channel {
                NotificationChannel::Email => self.gateway.send_email(employee, template).await,
                NotificationChannel::Chat => {
                    self.gateway.send_chat_message(employee, template).await
                }
            }
        };

        match self.send_timeout {
            Some(after) => match tokio::time::timeout(after, send).await {
                Ok(result) => result,
                Err(_) => Err(SendError::TimedOut { channel, after }.into()),
            },
            None => send.await,
        }
    }
}
