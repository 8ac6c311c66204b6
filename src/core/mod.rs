//! Core domain logic for imagehook
//!
//! This module contains pure logic with no I/O dependencies.
//! All version-control access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`StagedEntry`, `StatusKind`, `StagedFile`)
//! - `services/` - The staged file lister
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Error taxonomy shared by ports and services

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
