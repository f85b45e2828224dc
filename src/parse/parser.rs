use winnow::Parser;

use crate::{Attributes, Charge, Node, PolicyBuilder};

use super::error::ParseError;
use super::{LOG_TARGET, grammar};

const CHARGE: &str = "CHARGE";
const ALLOW: &str = "ALLOW";
const BLOCK: &str = "BLOCK";

/// The result of reading a directive set.
#[derive(Debug, Default)]
pub(crate) struct ParsedCharge {
    pub(crate) attributes: Attributes,
    pub(crate) allow: Option<Node>,
    pub(crate) block: Option<Node>,
}

impl ParsedCharge {
    /// Apply one directive line. All whitespace is removed before matching.
    pub(crate) fn apply(&mut self, line: usize, raw: &str) -> Result<(), ParseError> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let (keyword, body) =
            grammar::directive
                .parse(compact.as_str())
                .map_err(|_| ParseError::MissingSeparator {
                    line,
                    directive: raw.trim().to_owned(),
                })?;

        match keyword {
            CHARGE => self.apply_charge(line, body)?,
            ALLOW => self.allow = Some(grammar::rule(body)),
            BLOCK => self.block = Some(grammar::rule(body)),
            other => log::debug!(target: LOG_TARGET, "line {line}: ignoring directive '{other}'"),
        }
        Ok(())
    }

    fn apply_charge(&mut self, line: usize, body: &str) -> Result<(), ParseError> {
        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) =
                grammar::attribute
                    .parse(pair)
                    .map_err(|_| ParseError::MalformedAttribute {
                        line,
                        pair: pair.to_owned(),
                    })?;
            self.attributes.insert(name, value);
        }
        Ok(())
    }

    pub(crate) fn into_charge(self) -> Charge {
        let mut policy = PolicyBuilder::new();
        if let Some(allow) = self.allow {
            policy = policy.allow(allow);
        }
        if let Some(block) = self.block {
            policy = policy.block(block);
        }
        Charge::new(self.attributes, policy.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr;

    #[test]
    fn apply_charge_populates_attributes() {
        let mut parsed = ParsedCharge::default();
        parsed.apply(1, "CHARGE: a=1&b=2").unwrap();
        assert_eq!(parsed.attributes.get("a"), Some("1"));
        assert_eq!(parsed.attributes.get("b"), Some("2"));
    }

    #[test]
    fn apply_strips_all_whitespace() {
        let mut parsed = ParsedCharge::default();
        parsed.apply(1, "\tCHARGE :  card country = U S ").unwrap();
        assert_eq!(parsed.attributes.get("cardcountry"), Some("US"));
    }

    #[test]
    fn apply_skips_empty_pairs() {
        let mut parsed = ParsedCharge::default();
        parsed.apply(1, "CHARGE: a=1&&b=2&").unwrap();
        parsed.apply(2, "CHARGE:").unwrap();
        assert_eq!(parsed.attributes.len(), 2);
    }

    #[test]
    fn apply_pair_without_equals_fails() {
        let mut parsed = ParsedCharge::default();
        let err = parsed.apply(3, "CHARGE: a=1&amount").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedAttribute {
                line: 3,
                pair: "amount".into()
            }
        );
    }

    #[test]
    fn apply_missing_colon_fails() {
        let mut parsed = ParsedCharge::default();
        let err = parsed.apply(1, "  ALLOW amount<100 ").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSeparator {
                line: 1,
                directive: "ALLOW amount<100".into()
            }
        );
    }

    #[test]
    fn apply_last_rule_wins() {
        let mut parsed = ParsedCharge::default();
        parsed.apply(1, "ALLOW: amount<100").unwrap();
        parsed.apply(2, "ALLOW: amount<50").unwrap();
        parsed.apply(3, "BLOCK: amount>10").unwrap();
        assert_eq!(parsed.allow, Some(attr("amount").lt("50")));
        assert_eq!(parsed.block, Some(attr("amount").gt("10")));
    }

    #[test]
    fn apply_unknown_keyword_is_ignored() {
        let mut parsed = ParsedCharge::default();
        parsed.apply(1, "REVIEW: amount>1000").unwrap();
        parsed.apply(2, "allow: amount<100").unwrap();
        assert!(parsed.allow.is_none());
        assert!(parsed.block.is_none());
        assert!(parsed.attributes.is_empty());
    }

    #[test]
    fn into_charge_defaults() {
        let charge = ParsedCharge::default().into_charge();
        assert_eq!(charge.policy().allow_tree(), &Node::True);
        assert_eq!(charge.policy().block_tree(), &Node::False);
    }
}
