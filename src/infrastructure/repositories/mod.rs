pub mod in_memory;
pub mod roster_file;

pub use in_memory::InMemoryEmployeeDirectory;
pub use roster_file::RosterFileDirectory;
