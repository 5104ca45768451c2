use std::time::Duration;

use thiserror::Error;

use crate::domain::models::NotificationChannel;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Failures that abort a whole dispatch run.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to list employees in office: {0:#}")]
    Directory(anyhow::Error),
}

/// Failures raised around a single send.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("{channel} send timed out after {after:?}")]
    TimedOut {
        channel: NotificationChannel,
        after: Duration,
    },
    #[error("no {channel} contact on file for {employee}")]
    MissingContact {
        channel: NotificationChannel,
        employee: String,
    },
}
