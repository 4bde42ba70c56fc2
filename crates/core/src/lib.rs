//! Network monitoring domain logic.
//!
//! Everything in this crate is pure (no I/O, no async) so the monitor
//! loop in `netmon-agent` can be tested against it in isolation.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod network;
pub mod optimizer;
