//! Work session tracking for Aalto.
//!
//! A session remembers which card is currently being worked on and the last
//! task batch synchronized to it, so that consecutive sync calls can target
//! the same card without re-discovery. Sessions are deliberately small and
//! disposable: losing one never loses board data. The module follows
//! hexagonal architecture:
//!
//! - The session record in [`domain`]
//! - The store contract in [`ports`]
//! - In-memory and flat-file stores in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
