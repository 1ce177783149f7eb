//! # Data Reading
//!
//! Numeric values from commented text data.
//!
//! ## Pipeline
//!
//! ```text
//! line → trim_comments → literals (Cursor) → f64 values → rows
//! ```
//!
//! ## Example
//!
//! ```rust
//! use data_reading::{doubles_from_str, trim_comments};
//!
//! let line = "1.5 -2 3e1 # calibration run";
//! assert_eq!(doubles_from_str(trim_comments(line, "#")), vec![1.5, -2.0, 30.0]);
//! ```
//!
//! Malformed numbers are filtered out by the literal grammar and never
//! reported. Only I/O errors surface as [`ReadError`].

pub mod comments;
pub mod cursor;
pub mod error;
pub mod literal;
pub mod reader;

// Re-export public API
pub use comments::trim_comments;
pub use cursor::Cursor;
pub use error::{ReadError, ReadResult};
pub use literal::{doubles_from_str, literals, Literal, Literals};
pub use reader::{read_values, read_values_from_path, values_from_line};
