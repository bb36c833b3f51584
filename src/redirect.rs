//! Extraction of `<` and `>` file redirections from an argument vector.

use crate::tokenizer::ArgVector;
use std::path::PathBuf;

/// Input redirection operator, `<`.
pub const INPUT_OPERATOR: &str = "<";
/// Output redirection operator, `>`. The destination is created or truncated.
pub const OUTPUT_OPERATOR: &str = ">";

/// File redirections requested for a single (non-piped) command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirection {
    /// File to read standard input from, opened read-only.
    pub input: Option<PathBuf>,
    /// File to write standard output to.
    pub output: Option<PathBuf>,
}

impl Redirection {
    /// True when neither stream is redirected.
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none()
    }
}

/// Removes redirection operators and their targets from `args`.
///
/// The scan runs once, left to right. An operator followed by another token
/// records that token as the path and both are removed; a later operator of
/// the same kind overwrites an earlier one. An operator with nothing after it
/// stays in the vector as a plain argument.
pub fn resolve_redirection(args: ArgVector) -> (ArgVector, Redirection) {
    let mut redirection = Redirection::default();
    let mut remaining = Vec::with_capacity(args.len());
    let mut tokens = args.into_iter();

    while let Some(token) = tokens.next() {
        let slot = match token.as_str() {
            INPUT_OPERATOR => &mut redirection.input,
            OUTPUT_OPERATOR => &mut redirection.output,
            _ => {
                remaining.push(token);
                continue;
            }
        };
        match tokens.next() {
            Some(path) => *slot = Some(PathBuf::from(path)),
            None => remaining.push(token),
        }
    }

    (remaining, redirection)
}
