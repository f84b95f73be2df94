//! Aalto: task-board synchronization engine.
//!
//! This crate keeps one tracked card on a remote kanban-style board in
//! agreement with the ephemeral task batches reported by an external
//! planning tool: the card's rendered task block, checklist completion
//! state, lane placement over the card's lifecycle, and progress comments.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure reconciliation and matching logic with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the board service and the
//!   session record
//! - **Adapters**: Concrete implementations of ports (in-memory, flat file)
//!
//! # Modules
//!
//! - [`plan`]: Planner task batches, statuses, and progress summaries
//! - [`board`]: Remote board mirror types and the board gateway port
//! - [`session`]: The active-card session record and its stores
//! - [`sync`]: Reconcilers and the synchronization engine

pub mod board;
pub mod plan;
pub mod session;
pub mod sync;
