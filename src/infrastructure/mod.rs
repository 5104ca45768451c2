pub mod messaging;
pub mod observability;
pub mod repositories;
