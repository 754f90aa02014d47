//! Duration parsing error types.

use std::fmt;

/// Result type for duration parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for duration parsing.
///
/// Carries the rejected input and the target type so the message is
/// diagnosable on its own, e.g.
/// `failed to parse "P1X" into interval: format mismatch at position 2 (found 'X')`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// The rejected input.
    pub input: String,
    /// Name of the type being parsed.
    pub type_name: &'static str,
    /// Byte offset where parsing stopped (0-based).
    pub position: usize,
    /// Character at `position`, if input did not end there.
    pub found: Option<char>,
}

impl ParseError {
    /// Creates a new parse error, reading the offending character from `input`.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        input: &str,
        type_name: &'static str,
        position: usize,
    ) -> Self {
        let found = input.get(position..).and_then(|rest| rest.chars().next());
        Self {
            kind,
            input: input.to_owned(),
            type_name,
            position,
            found,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse {:?} into {}: {} at position {}",
            self.input, self.type_name, self.kind, self.position
        )?;
        if let Some(found) = self.found {
            write!(f, " (found {found:?})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended where a digit or another token was required.
    UnexpectedEof,
    /// A `-` sign was followed by a non-digit character. A sign at the end
    /// of input is [`ParseErrorKind::UnexpectedEof`].
    ExpectedDigit,
    /// A character did not fit any valid continuation.
    FormatMismatch,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::ExpectedDigit => write!(f, "expected digit"),
            Self::FormatMismatch => write!(f, "format mismatch"),
        }
    }
}
