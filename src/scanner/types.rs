use serde::Serialize;

/// One line of the Dockerfile as read, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

impl RawLine {
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// A recognized instruction line.
///
/// Fields are declared in alphabetical order so the serialized form has
/// sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedInstruction {
    /// Text following the instruction token.
    pub argument: String,
    /// Upper-cased instruction token.
    pub instruction: String,
    pub line_number: usize,
}

/// Classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Matches the ignore pattern (blank line, comment).
    Ignored,
    /// Matches the instruction grammar with a known instruction.
    Instruction(ParsedInstruction),
    /// Matches the instruction grammar but the token is not in the vocabulary.
    InvalidInstruction { token: String, argument: String },
    /// Matches neither pattern.
    Unrecognized,
}
