//! Domain model for work sessions.

mod ids;
mod session;

pub use ids::SessionId;
pub use session::Session;
