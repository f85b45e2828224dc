use thiserror::Error;

/// Errors produced when reading directive lines.
///
/// Rule text never produces an error; only the directive structure around it
/// is validated. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: directive '{directive}' has no ':' separator")]
    MissingSeparator { line: usize, directive: String },

    #[error("line {line}: charge attribute '{pair}' has no '=' separator")]
    MalformedAttribute { line: usize, pair: String },
}

impl ParseError {
    /// The 1-based line the error occurred on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingSeparator { line, .. } | ParseError::MalformedAttribute { line, .. } => {
                *line
            }
        }
    }
}
