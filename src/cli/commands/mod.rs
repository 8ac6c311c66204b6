//! Command implementations

mod staged;

pub use staged::staged;
