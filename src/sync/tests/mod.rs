//! Unit tests for the sync module.
//!
//! Tests are organised by reconciliation concern: description rewriting,
//! name matching, checklist planning, comment rendering, and engine
//! orchestration against in-memory adapters.
