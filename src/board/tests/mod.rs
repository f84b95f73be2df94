//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain types and list-role discovery on
//! one side, the in-memory gateway adapter on the other.
