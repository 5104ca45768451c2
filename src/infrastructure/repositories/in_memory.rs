use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Employee, StaffMember},
    repositories::EmployeeDirectory,
};

#[derive(Default)]
pub struct InMemoryEmployeeDirectory {
    office: String,
    staff: Arc<RwLock<Vec<StaffMember>>>,
}

impl InMemoryEmployeeDirectory {
    pub fn new(office: impl Into<String>) -> Self {
        Self {
            office: office.into(),
            staff: Arc::default(),
        }
    }

    pub async fn add(&self, member: StaffMember) {
        let mut staff = self.staff.write().await;
        staff.push(member);
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn employees_in_office(&self) -> anyhow::Result<Vec<Arc<dyn Employee>>> {
        let staff = self.staff.read().await;
        Ok(staff
            .iter()
            .filter(|m| m.belongs_to(&self.office))
            .map(|m| Arc::new(m.clone()) as Arc<dyn Employee>)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NotificationChannel;

    #[tokio::test]
    async fn lists_only_configured_office_in_insertion_order() {
        let directory = InMemoryEmployeeDirectory::new("New York");
        directory
            .add(StaffMember::new("Bob", "New York", NotificationChannel::Email))
            .await;
        directory
            .add(StaffMember::new("Olga", "Berlin", NotificationChannel::Chat))
            .await;
        directory
            .add(StaffMember::new("Martha", "new york", NotificationChannel::Chat))
            .await;

        let names: Vec<String> = directory
            .employees_in_office()
            .await
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();

        assert_eq!(names, ["Bob", "Martha"]);
    }
}
