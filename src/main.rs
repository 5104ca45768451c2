use std::sync::Arc;

use anyhow::Context;
use lunch_notifier::{
    application::{handlers::LunchNotifier, services::SystemClock},
    config::Config,
    infrastructure::{
        messaging::LoggingNotificationGateway, observability::TracingObserver,
        repositories::RosterFileDirectory,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(anyhow::Error::msg)?;

    tracing::info!(
        office = %config.office,
        roster = %config.roster_path.display(),
        "Starting lunch dispatch"
    );

    let directory = RosterFileDirectory::new(config.roster_path, config.office);
    let mut notifier = LunchNotifier::new(
        Arc::new(LoggingNotificationGateway::new()),
        Arc::new(directory),
        Arc::new(TracingObserver),
        Arc::new(SystemClock),
        config.templates,
    );
    if let Some(timeout) = config.send_timeout {
        notifier = notifier.with_send_timeout(timeout);
    }

    let report = notifier
        .run_dispatch()
        .await
        .context("lunch dispatch aborted")?;

    tracing::debug!(report = %serde_json::to_string(&report)?, "dispatch report");
    Ok(())
}
