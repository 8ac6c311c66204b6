//! Listing services
//!
//! Logic that operates on whatever a [`StagedStatusSource`] reports.
//!
//! - [`lister`] - Select newly added staged files
//!
//! [`StagedStatusSource`]: crate::core::ports::StagedStatusSource

pub mod lister;

pub use lister::{StagedFileLister, select_new_files};
