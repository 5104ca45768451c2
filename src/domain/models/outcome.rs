use serde::{Deserialize, Serialize};

use super::channel::NotificationChannel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Delivered { channel: NotificationChannel },
    NotWorking,
    Unrouted,
    Failed { channel: NotificationChannel, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientOutcome {
    pub employee: String,
    pub outcome: DispatchOutcome,
}

/// What happened to every employee in one dispatch run, in directory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub template: String,
    pub outcomes: Vec<RecipientOutcome>,
}

impl DispatchReport {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, employee: impl Into<String>, outcome: DispatchOutcome) {
        self.outcomes.push(RecipientOutcome {
            employee: employee.into(),
            outcome,
        });
    }

    pub fn delivered(&self) -> usize {
        self.count(|o| matches!(o, DispatchOutcome::Delivered { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, DispatchOutcome::NotWorking))
    }

    pub fn unrouted(&self) -> usize {
        self.count(|o| matches!(o, DispatchOutcome::Unrouted))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DispatchOutcome::Failed { .. }))
    }

    pub fn summary(&self) -> String {
        format!(
            "Lunch dispatch finished: {} delivered, {} skipped, {} unrouted, {} failed",
            self.delivered(),
            self.skipped(),
            self.unrouted(),
            self.failed()
        )
    }

    fn count(&self, predicate: impl Fn(&DispatchOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|r| predicate(&r.outcome)).count()
    }
}
