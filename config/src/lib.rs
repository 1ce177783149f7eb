//! # Config Crate
//!
//! Centralized configuration constants for the numeric utility crates.
//! Sample-count limits, comment handling defaults and numeric tolerances
//! are defined here so that the sampling, zero-crossing and data-reading
//! crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ReaderConfig, DEFAULT_COMMENT_CHARACTERS, MIN_LINSPACE_SAMPLES};
//!
//! // Default reader configuration strips `#` comments
//! let reader = ReaderConfig::default();
//! assert_eq!(reader.comment_characters(), DEFAULT_COMMENT_CHARACTERS);
//!
//! // linspace needs at least two samples to define a spacing
//! assert_eq!(MIN_LINSPACE_SAMPLES, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure `std`, usable from every crate in the workspace
//! - **Validated Settings**: Runtime settings are built through checked constructors

pub mod constants;

#[cfg(test)]
mod tests;
