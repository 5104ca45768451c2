pub mod channel;
pub mod employee;
pub mod outcome;
pub mod template;

pub use channel::NotificationChannel;
pub use employee::{Employee, StaffMember};
pub use outcome::{DispatchOutcome, DispatchReport, RecipientOutcome};
pub use template::{LATE_LUNCH_TEMPLATE, LunchTemplates, REGULAR_LUNCH_TEMPLATE};
