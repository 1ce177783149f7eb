//! # Comment Trimming

/// Part of `line` before the first comment character.
///
/// The whole line is returned when no comment character occurs; an empty
/// `comment_characters` set never trims.
///
/// ## Example
///
/// ```rust
/// use data_reading::trim_comments;
///
/// assert_eq!(trim_comments("1 2 # note", "#"), "1 2 ");
/// assert_eq!(trim_comments("3 ; 4 % 5", "%;"), "3 ");
/// assert_eq!(trim_comments("6 7", "#"), "6 7");
/// ```
#[must_use]
pub fn trim_comments<'a>(line: &'a str, comment_characters: &str) -> &'a str {
    match line.find(|c: char| comment_characters.contains(c)) {
        Some(position) => &line[..position],
        None => line,
    }
}
