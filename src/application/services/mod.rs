pub mod clock;
pub mod notification;
pub mod observer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notification::NotificationGateway;
pub use observer::DispatchObserver;
