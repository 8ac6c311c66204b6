//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the listing logic and the
//! version-control system it reads from.
//!
//! Implementations live in the `adapters` module.

mod staged_status;

pub use staged_status::StagedStatusSource;
