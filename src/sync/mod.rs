//! Task-batch synchronization for Aalto.
//!
//! This is the engine core: reconciling a card's rendered task block and
//! checklist completion state against the latest planner batch, pacing
//! remote mutations, and driving the card's lifecycle (create, pickup,
//! sync, complete). The module follows hexagonal architecture:
//!
//! - Pure reconciliation and matching logic in [`domain`]
//! - The orchestrating engine and comment templates in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
