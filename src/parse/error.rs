use thiserror::Error;

/// Errors produced when parsing a rule string.
///
/// Offsets are byte offsets into the rule as written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unmatched '(' at offset {offset}")]
    UnmatchedOpen { offset: usize },

    #[error("unmatched ')' at offset {offset}")]
    UnmatchedClose { offset: usize },

    #[error("unexpected input at offset {offset}: {message}")]
    Lex { offset: usize, message: String },
}
