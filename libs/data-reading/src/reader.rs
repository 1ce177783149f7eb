//! # Row Reader
//!
//! Reads rows of numeric values from commented text: one row per line,
//! comments removed, lines without any value skipped.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::ReaderConfig;
//! use data_reading::read_values;
//!
//! let text = "# x y\n0.0 1.0\n\n0.5 -1.0 # dip\n";
//! let rows = read_values(text.as_bytes(), &ReaderConfig::default()).unwrap();
//! assert_eq!(rows, vec![vec![0.0, 1.0], vec![0.5, -1.0]]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use config::constants::ReaderConfig;
use tracing::{debug, trace};

use crate::comments::trim_comments;
use crate::error::{ReadError, ReadResult};
use crate::literal::doubles_from_str;

/// Values on `line` after its comment is removed.
///
/// ## Example
///
/// ```rust
/// use config::constants::ReaderConfig;
/// use data_reading::values_from_line;
///
/// let values = values_from_line("3 4 # 5", &ReaderConfig::default());
/// assert_eq!(values, vec![3.0, 4.0]);
/// ```
pub fn values_from_line(line: &str, config: &ReaderConfig) -> Vec<f64> {
    doubles_from_str(trim_comments(line, config.comment_characters()))
}

/// Read every non-empty row from `reader`.
///
/// ## Errors
///
/// [`ReadError::Line`] when the underlying reader fails or a line is not
/// valid UTF-8.
pub fn read_values<R: BufRead>(reader: R, config: &ReaderConfig) -> ReadResult<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ReadError::Line {
            line: index + 1,
            source,
        })?;

        let values = values_from_line(&line, config);
        if values.is_empty() {
            trace!(line = index + 1, "no values on line");
            skipped += 1;
            continue;
        }
        rows.push(values);
    }

    debug!(rows = rows.len(), skipped, "finished reading numeric rows");
    Ok(rows)
}

/// [`read_values`] on the file at `path`.
///
/// ## Errors
///
/// [`ReadError::Open`] when the file cannot be opened, otherwise as
/// [`read_values`].
pub fn read_values_from_path(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> ReadResult<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_values(BufReader::new(file), config)
}
