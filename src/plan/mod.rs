//! Planner task batches for Aalto.
//!
//! The external planning tool reports its task list as a batch of entries,
//! each carrying a content key, a lifecycle status, and a human-readable
//! gerund label. This module models that boundary: parsing batches from the
//! planner's JSON payload, mapping statuses to board lanes, and summarising
//! batch progress.

pub mod domain;
