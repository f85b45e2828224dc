mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub(crate) use parser::ParsedCharge;

use crate::Node;

const LOG_TARGET: &str = "radar::parse";

/// Parse rule text into an evaluation tree.
///
/// Whitespace is ignored. The text is split at the last `AND`/`OR` if there
/// is one, and each side is read as a single comparison. A comparison with no
/// recognisable operator becomes [`Node::False`]; this function never fails.
#[must_use]
pub fn parse_rule(text: &str) -> Node {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let node = grammar::rule(&compact);
    log::trace!(target: LOG_TARGET, "parsed rule '{compact}' as {node}");
    node
}

/// Read an ordered list of directives, numbering them from 1.
pub(crate) fn parse_directives<I, S>(directives: I) -> Result<ParsedCharge, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedCharge::default();
    for (idx, directive) in directives.into_iter().enumerate() {
        parsed.apply(idx + 1, directive.as_ref())?;
    }
    Ok(parsed)
}

/// Read directives from text, one per line, skipping blank lines and `#` comments.
pub(crate) fn parse_directive_text(input: &str) -> Result<ParsedCharge, ParseError> {
    let mut parsed = ParsedCharge::default();
    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        parsed.apply(idx + 1, line)?;
    }
    Ok(parsed)
}
