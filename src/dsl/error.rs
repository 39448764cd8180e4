use thiserror::Error;

/// The single error type raised by the DSL parser.
///
/// Every failure - lexical, structural, grammatical, semantic or I/O -
/// is wrapped with the 1-based number and verbatim text of the line
/// being parsed when it occurred. Errors raised before any line is
/// consumed (missing files, unreadable directories) carry line number 0
/// and an empty source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line_number}: {source_line}")]
pub struct ParserError {
    pub message: String,
    pub line_number: usize,
    pub source_line: String,
}

impl ParserError {
    pub fn new(message: impl Into<String>, line_number: usize, source_line: impl Into<String>) -> Self {
        ParserError {
            message: message.into(),
            line_number,
            source_line: source_line.into(),
        }
    }

    /// An error with no line context, for failures ahead of parsing.
    pub(crate) fn io(message: impl Into<String>) -> Self {
        ParserError::new(message, 0, "")
    }
}
