//! Remote board integration for Aalto.
//!
//! The board is an external kanban-style service owning cards, lists,
//! checklists, and labels. This module mirrors those entities locally,
//! discovers lists by role, and defines the gateway port the
//! synchronization engine drives. The authenticated transport behind the
//! gateway is a collaborator concern; the crate ships an in-memory adapter
//! for tests and integration suites. The module follows hexagonal
//! architecture:
//!
//! - Mirror types and list-role discovery in [`domain`]
//! - The gateway contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
