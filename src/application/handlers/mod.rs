pub mod lunch_dispatcher;

pub use lunch_dispatcher::LunchNotifier;
