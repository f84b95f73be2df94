//! Adapter implementations of the session ports.

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
