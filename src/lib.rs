mod error;
mod evaluate;
mod parse;
mod types;

pub use error::RadarError;
pub use parse::{ParseError, parse_rule};
pub use types::{
    AttrExpr, Attributes, Charge, CompareOp, Connective, Decision, EvaluationReport, Node, Policy,
    PolicyBuilder, attr, coerce_int,
};

/// Decide a single charge from its directives.
///
/// ```
/// use radar::Decision;
///
/// let decision = radar::decide([
///     "CHARGE: card_country=US&currency=USD&amount=90&ip_country=CA",
///     "ALLOW: amount < 100",
///     "BLOCK: card_country != ip_country AND amount > 100",
/// ])
/// .unwrap();
/// assert_eq!(decision, Decision::Accept);
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] if a directive has no `:` or a charge attribute has
/// no `=`.
pub fn decide<I, S>(directives: I) -> Result<Decision, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Charge::from_directives(directives)?.decide())
}

/// Same as [`decide`], encoded as `1` for accept and `0` for reject.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed directives.
pub fn decide_code<I, S>(directives: I) -> Result<i32, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    decide(directives).map(Decision::code)
}
