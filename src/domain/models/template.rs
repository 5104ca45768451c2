use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub const REGULAR_LUNCH_TEMPLATE: &str = "It's Lunchtime, come eat!";
pub const LATE_LUNCH_TEMPLATE: &str = "It's Lunchtime -- Sorry it's late!";

/// Lunch is late once this hour has passed.
const LATE_AFTER_HOUR: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchTemplates {
    pub regular: String,
    pub late: String,
}

impl LunchTemplates {
    pub fn new(regular: impl Into<String>, late: impl Into<String>) -> Self {
        Self {
            regular: regular.into(),
            late: late.into(),
        }
    }

    pub fn select(&self, now: NaiveDateTime) -> &str {
        if now.hour() > LATE_AFTER_HOUR {
            &self.late
        } else {
            &self.regular
        }
    }
}

impl Default for LunchTemplates {
    fn default() -> Self {
        Self::new(REGULAR_LUNCH_TEMPLATE, LATE_LUNCH_TEMPLATE)
    }
}
