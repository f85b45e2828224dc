use std::num::IntErrorKind;

use super::node::CompareOp;

/// Coerce attribute or literal text to an integer for ordered comparisons.
///
/// Accepts an optional `+`/`-` sign followed by decimal digits. Values outside
/// the `i64` range saturate to `i64::MAX` / `i64::MIN`; anything else that is
/// not a decimal integer coerces to `0`. Never fails.
#[must_use]
pub fn coerce_int(text: &str) -> i64 {
    match text.parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

impl CompareOp {
    /// Compare two already-resolved operands.
    ///
    /// `Eq` and `Ne` compare the text exactly; the ordered operators coerce
    /// both sides with [`coerce_int`].
    #[must_use]
    pub fn apply(self, lhs: &str, rhs: &str) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
            CompareOp::Lt => coerce_int(lhs) < coerce_int(rhs),
            CompareOp::Lte => coerce_int(lhs) <= coerce_int(rhs),
            CompareOp::Gt => coerce_int(lhs) > coerce_int(rhs),
            CompareOp::Gte => coerce_int(lhs) >= coerce_int(rhs),
        }
    }
}
