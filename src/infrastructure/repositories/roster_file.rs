use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    errors::DomainError,
    models::{Employee, StaffMember},
    repositories::EmployeeDirectory,
};

#[derive(Debug, Deserialize)]
struct Roster {
    #[serde(default)]
    employees: Vec<StaffMember>,
}

/// Reads the staff roster from a JSON file on every call, so edits to the
/// file are picked up by the next dispatch.
pub struct RosterFileDirectory {
    path: PathBuf,
    office: String,
}

impl RosterFileDirectory {
    pub fn new(path: impl Into<PathBuf>, office: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            office: office.into(),
        }
    }

    fn parse(&self, raw: &str) -> Result<Vec<StaffMember>, DomainError> {
        let roster: Roster = serde_json::from_str(raw).map_err(|err| {
            DomainError::Validation(format!(
                "malformed roster {}: {err}",
                self.path.display()
            ))
        })?;

        Ok(roster
            .employees
            .into_iter()
            .filter(|m| m.belongs_to(&self.office))
            .collect())
    }
}

#[async_trait]
impl EmployeeDirectory for RosterFileDirectory {
    async fn employees_in_office(&self) -> anyhow::Result<Vec<Arc<dyn Employee>>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            DomainError::NotFound(format!("roster {}: {err}", self.path.display()))
        })?;

        let staff = self.parse(&raw)?;
        tracing::debug!(
            office = %self.office,
            count = staff.len(),
            "loaded roster"
        );

        Ok(staff
            .into_iter()
            .map(|m| Arc::new(m) as Arc<dyn Employee>)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NotificationChannel;

    const ROSTER: &str = r#"{
        "employees": [
            {
                "id": "6b0f7f9e-3c39-4a5e-9a43-3f1f4f3f9c11",
                "name": "Bob",
                "office": "New York",
                "email": "bob@example.com",
                "notification_preference": "email"
            },
            {
                "id": "0d3c1f7a-5d0b-4f55-8d8c-2e3c5b7f1a22",
                "name": "Olga",
                "office": "Berlin",
                "chat_handle": "@olga",
                "notification_preference": "chat"
            },
            {
                "id": "91a4c6e2-7b1d-4c3e-a5f0-6d2b8e9c3b33",
                "name": "Martha",
                "office": "New York",
                "chat_handle": "@martha",
                "notification_preference": "slack",
                "working_days": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
                "days_off": ["2024-06-03"]
            }
        ]
    }"#;

    #[test]
    fn keeps_only_configured_office() {
        let directory = RosterFileDirectory::new("roster.json", "New York");

        let staff = directory.parse(ROSTER).unwrap();

        let names: Vec<_> = staff.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Martha"]);
        assert_eq!(
            staff[1].notification_preference(),
            Some(NotificationChannel::Chat)
        );
        assert_eq!(staff[1].days_off.len(), 1);
    }

    #[test]
    fn malformed_roster_is_a_validation_error() {
        let directory = RosterFileDirectory::new("roster.json", "New York");

        let err = directory.parse("{ not json").unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn reads_roster_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("roster-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, ROSTER).await.unwrap();
        let directory = RosterFileDirectory::new(&path, "Berlin");

        let employees = directory.employees_in_office().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name(), "Olga");
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let directory = RosterFileDirectory::new("/definitely/not/here.json", "New York");

        let Err(err) = directory.employees_in_office().await else {
            panic!("expected a missing roster to fail");
        };

        assert!(err.to_string().contains("not found"));
    }
}
