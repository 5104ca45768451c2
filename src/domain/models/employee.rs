use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::channel::NotificationChannel;

/// Someone who may be told that lunch is ready.
pub trait Employee: Send + Sync {
    fn name(&self) -> &str;

    /// `false` when the employee is off (leave, vacation, non-working weekday).
    fn is_working_on(&self, date: NaiveDate) -> bool;

    /// `None` when the stored preference does not map to a known channel.
    fn notification_preference(&self) -> Option<NotificationChannel>;

    /// Address on the given channel: email address or chat handle.
    fn contact_for(&self, channel: NotificationChannel) -> Option<&str>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub office: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub chat_handle: Option<String>,
    pub notification_preference: String,
    #[serde(default = "default_working_days")]
    pub working_days: Vec<Weekday>,
    #[serde(default)]
    pub days_off: Vec<NaiveDate>,
}

fn default_working_days() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

impl StaffMember {
    pub fn new(
        name: impl Into<String>,
        office: impl Into<String>,
        notification_preference: NotificationChannel,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            office: office.into(),
            email: None,
            chat_handle: None,
            notification_preference: notification_preference.as_str().to_string(),
            working_days: default_working_days(),
            days_off: Vec::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_chat_handle(mut self, handle: impl Into<String>) -> Self {
        self.chat_handle = Some(handle.into());
        self
    }

    pub fn with_working_days(mut self, days: Vec<Weekday>) -> Self {
        self.working_days = days;
        self
    }

    pub fn with_day_off(mut self, date: NaiveDate) -> Self {
        self.days_off.push(date);
        self
    }

    pub fn belongs_to(&self, office: &str) -> bool {
        self.office.trim().eq_ignore_ascii_case(office.trim())
    }
}

impl Employee for StaffMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_on(&self, date: NaiveDate) -> bool {
        self.working_days.contains(&date.weekday()) && !self.days_off.contains(&date)
    }

    fn notification_preference(&self) -> Option<NotificationChannel> {
        NotificationChannel::from_str(&self.notification_preference)
    }

    fn contact_for(&self, channel: NotificationChannel) -> Option<&str> {
        let contact = match channel {
            NotificationChannel::Email => self.email.as_deref(),
            NotificationChannel::Chat => self.chat_handle.as_deref(),
        };
        contact.filter(|value| !value.trim().is_empty())
    }
}
