//! Utility modules for file discovery and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery and reading utilities
//! - [`paths`]: Path normalisation helpers (tilde expansion, slash form)

pub mod files;
pub mod paths;
