use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::Employee;

/// Source of the employees to notify. The office is fixed by the
/// implementation's configuration.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn employees_in_office(&self) -> anyhow::Result<Vec<Arc<dyn Employee>>>;
}
