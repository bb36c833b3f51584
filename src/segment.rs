//! Splitting a raw input line into ordered command segments.
//!
//! A line is split on `;` into statements, and each statement is split once
//! more at its first `&`: the part before the marker runs in the background
//! and whatever follows it becomes an additional foreground segment. The whole
//! line `!!` replays the previously dispatched line.

use crate::tokenizer::BACKGROUND_MARKER;

/// Whole-line token that replays the previously dispatched line.
pub const RECALL_TOKEN: &str = "!!";
/// Separator between independently dispatched statements.
pub const STATEMENT_SEPARATOR: char = ';';

const BLANKS: &[char] = &[' ', '\t'];

/// Single-slot record of the last dispatched line.
///
/// Never holds [`RECALL_TOKEN`]; it is either empty or a real command line.
#[derive(Debug, Clone, Default)]
pub struct History {
    last: Option<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last dispatched line, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    fn store(&mut self, line: &str) {
        debug_assert_ne!(line, RECALL_TOKEN);
        self.last = Some(line.to_string());
    }
}

/// One independently dispatched sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSegment {
    /// Trimmed, non-empty command text.
    pub text: String,
    /// Whether the segment was followed by the background marker.
    pub background: bool,
}

impl CommandSegment {
    fn new(text: &str, background: bool) -> Self {
        Self {
            text: text.to_string(),
            background,
        }
    }
}

/// What happened to the history slot while segmenting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// An ordinary line; it is now the stored history.
    Stored,
    /// The line was the recall token and the stored line was used instead.
    Replayed(String),
    /// The line was the recall token but nothing has been dispatched yet.
    Empty,
}

/// Result of [`segment`]: the recall status and the segments in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub recall: Recall,
    pub segments: Vec<CommandSegment>,
}

/// Segments `line`, consulting and updating `history`.
///
/// `history` is only read when `line` is exactly [`RECALL_TOKEN`]; any other
/// line is written into it before splitting. Apart from that slot the result
/// depends on `line` alone.
pub fn segment(line: &str, history: &mut History) -> Segmentation {
    let (recall, working) = if line == RECALL_TOKEN {
        match history.last() {
            Some(last) => (Recall::Replayed(last.to_string()), last.to_string()),
            None => {
                return Segmentation {
                    recall: Recall::Empty,
                    segments: Vec::new(),
                };
            }
        }
    } else {
        history.store(line);
        (Recall::Stored, line.to_string())
    };

    Segmentation {
        recall,
        segments: split_statements(&working),
    }
}

/// Splits `line` on [`STATEMENT_SEPARATOR`] and detects background markers.
pub fn split_statements(line: &str) -> Vec<CommandSegment> {
    let mut segments = Vec::new();

    for piece in line.split(STATEMENT_SEPARATOR) {
        let piece = piece.trim_matches(BLANKS);
        if piece.is_empty() {
            continue;
        }

        match piece.split_once(BACKGROUND_MARKER) {
            Some((before, after)) => {
                let before = before.trim_matches(BLANKS);
                if !before.is_empty() {
                    segments.push(CommandSegment::new(before, true));
                }
                let after = after.trim_start_matches(BLANKS);
                if !after.is_empty() {
                    segments.push(CommandSegment::new(after, false));
                }
            }
            None => segments.push(CommandSegment::new(piece, false)),
        }
    }

    segments
}
