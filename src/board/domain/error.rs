//! Error types for board domain parsing and list discovery.

use super::ListRole;
use thiserror::Error;

/// Error returned while parsing list roles from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown list role: {0}")]
pub struct ParseListRoleError(pub String);

/// Error returned when no board list serves a required role.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no board list is configured for the '{0}' role")]
pub struct UnconfiguredListError(pub ListRole);
