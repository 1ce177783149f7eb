//! Centralized configuration values shared across the numeric utility crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Minimum number of samples `linspace` accepts.
///
/// Two points are needed to define the spacing `(end - begin) / (count - 1)`.
///
/// # Examples
/// ```
/// use config::constants::MIN_LINSPACE_SAMPLES;
/// assert_eq!(MIN_LINSPACE_SAMPLES, 2);
/// ```
pub const MIN_LINSPACE_SAMPLES: usize = 2;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Relative tolerance for comparing angles that differ by whole turns.
///
/// `wrap_2pi(x + k * 2π)` agrees with `wrap_2pi(x)` within this tolerance.
///
/// # Examples
/// ```
/// use config::constants::WRAP_RELATIVE_TOLERANCE;
/// assert!(WRAP_RELATIVE_TOLERANCE < 1.0e-9);
/// ```
pub const WRAP_RELATIVE_TOLERANCE: f64 = 1.0e-12;

// =============================================================================
// TEXT READING CONSTANTS
// =============================================================================

/// Comment characters used when none are configured.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COMMENT_CHARACTERS;
/// assert!(DEFAULT_COMMENT_CHARACTERS.contains('#'));
/// ```
pub const DEFAULT_COMMENT_CHARACTERS: &str = "#";

/// Characters that may appear inside a floating-point literal.
///
/// None of them can start a comment, otherwise trimming would cut numbers
/// in half.
///
/// # Examples
/// ```
/// use config::constants::LITERAL_CHARACTERS;
/// assert!(LITERAL_CHARACTERS.contains('e'));
/// ```
pub const LITERAL_CHARACTERS: &str = "0123456789+-.eE";

/// Settings for reading numeric values out of text lines.
///
/// # Examples
/// ```
/// use config::constants::ReaderConfig;
/// let config = ReaderConfig::default();
/// assert_eq!(config.comment_characters(), "#");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    comment_characters: String,
}

impl ReaderConfig {
    /// Builds a reader configuration, rejecting comment characters that
    /// could occur inside a numeric literal.
    ///
    /// An empty set is valid and disables comment trimming.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ReaderConfig;
    /// let cfg = ReaderConfig::new("#;%").expect("valid config");
    /// assert_eq!(cfg.comment_characters(), "#;%");
    /// assert!(ReaderConfig::new("#-").is_err());
    /// ```
    pub fn new(comment_characters: impl Into<String>) -> Result<Self, ConfigError> {
        let comment_characters = comment_characters.into();
        if let Some(c) = comment_characters
            .chars()
            .find(|c| LITERAL_CHARACTERS.contains(*c))
        {
            return Err(ConfigError::ConflictingCommentCharacter(c));
        }
        Ok(Self { comment_characters })
    }

    /// Characters that start a comment.
    pub fn comment_characters(&self) -> &str {
        &self.comment_characters
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comment_characters: DEFAULT_COMMENT_CHARACTERS.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a comment character can also appear inside a literal.
    ConflictingCommentCharacter(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConflictingCommentCharacter(c) => {
                write!(f, "comment character {c:?} can appear inside a numeric literal")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
