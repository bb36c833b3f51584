//! Detection of the two-stage `|` pipeline.

/// Pipe separator between the producing and the consuming command.
pub const PIPE_SEPARATOR: char = '|';

/// A command string split at its pipe separator, if any.
///
/// Only two stages are ever produced: any further separator stays verbatim
/// inside the right-hand text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pipeline<'a> {
    /// No pipe separator; the whole command text.
    Single(&'a str),
    /// Left (producer) and right (consumer) command texts.
    Piped(&'a str, &'a str),
}

/// Splits `command` at its first `|`.
///
/// The right-hand text has its leading whitespace removed; the left-hand text
/// is returned as is, since the tokenizer ignores surrounding whitespace.
pub fn split_pipeline(command: &str) -> Pipeline<'_> {
    match command.split_once(PIPE_SEPARATOR) {
        Some((left, right)) => Pipeline::Piped(left, right.trim_start()),
        None => Pipeline::Single(command),
    }
}
