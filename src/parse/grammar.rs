use winnow::combinator::{alt, separated_pair};
use winnow::error::{ContextError, ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{rest, take_till};

use crate::{CompareOp, Connective, Node};

use super::LOG_TARGET;

// -- Tokens -----------------------------------------------------------------

// Two-character operators come before their one-character prefixes.
fn compare_op(input: &mut &str) -> ModalResult<CompareOp> {
    alt((
        "!=".value(CompareOp::Ne),
        "==".value(CompareOp::Eq),
        ">=".value(CompareOp::Gte),
        ">".value(CompareOp::Gt),
        "<=".value(CompareOp::Lte),
        "<".value(CompareOp::Lt),
    ))
    .parse_next(input)
}

fn connective(input: &mut &str) -> ModalResult<Connective> {
    alt((
        "AND".value(Connective::And),
        "OR".value(Connective::Or),
    ))
    .parse_next(input)
}

/// Split `text` around the rightmost position at which `token` matches.
///
/// The left segment is as long as possible, so when a token occurs more than
/// once the last occurrence is the split point.
fn split_rightmost<'i, O>(
    text: &'i str,
    mut token: impl Parser<&'i str, O, ErrMode<ContextError>>,
) -> Option<(&'i str, O, &'i str)> {
    text.char_indices().rev().find_map(|(idx, _)| {
        let mut remaining = &text[idx..];
        token
            .parse_next(&mut remaining)
            .ok()
            .map(|found| (&text[..idx], found, remaining))
    })
}

// -- Rules ------------------------------------------------------------------

/// A rule is either one comparison or two comparisons joined by a connective.
pub(crate) fn rule(text: &str) -> Node {
    match split_rightmost(text, connective) {
        Some((left, conn, right)) => comparison(left).join(conn, comparison(right)),
        None => comparison(text),
    }
}

pub(crate) fn comparison(text: &str) -> Node {
    match split_rightmost(text, compare_op) {
        Some((key, op, value)) => Node::Compare {
            key: key.to_owned(),
            op,
            value: value.to_owned(),
        },
        None => {
            log::debug!(target: LOG_TARGET, "no comparison operator in '{text}', using FALSE");
            Node::False
        }
    }
}

// -- Directives -------------------------------------------------------------

/// `KEYWORD:body`; the body is everything after the first `:`.
pub(crate) fn directive<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    separated_pair(take_till(0.., ':'), ':', rest).parse_next(input)
}

/// `name=value`; the value is everything after the first `=`.
pub(crate) fn attribute<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    separated_pair(take_till(0.., '='), '=', rest).parse_next(input)
}
