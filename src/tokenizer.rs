//! Splitting a single command string into an argument vector.

use regex::Regex;
use std::sync::LazyLock;

/// Token that requests background dispatch of a segment.
///
/// The line segmenter strips it before a command ever reaches the tokenizer,
/// but a stray one (e.g. the second `&` in `a & b & c`) is still dropped here.
pub const BACKGROUND_MARKER: &str = "&";

/// Ordered, owned list of non-empty arguments. `args[0]` is the program name.
pub type ArgVector = Vec<String>;

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    // Only space, tab and newline separate arguments; other whitespace is literal.
    Regex::new(r"[ \t\n]+").expect("delimiter pattern is valid")
});

/// Splits `command` on runs of spaces, tabs and newlines.
///
/// There is no quoting and no escaping: an argument can never contain one of
/// the delimiter characters. Empty input yields an empty vector, which callers
/// treat as "nothing to execute".
pub fn tokenize(command: &str) -> ArgVector {
    DELIMITERS
        .split(command)
        .filter(|token| !token.is_empty() && *token != BACKGROUND_MARKER)
        .map(str::to_string)
        .collect()
}
