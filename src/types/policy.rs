use std::fmt;

use super::attributes::Attributes;
use super::decision::Decision;
use super::evaluation_report::EvaluationReport;
use super::node::Node;

/// Builder for constructing a [`Policy`].
///
/// Either tree can be given as a [`Node`] or as rule text. A tree that is
/// never set keeps its default: allow everything, block nothing.
///
/// # Example
///
/// ```
/// use radar::{Attributes, Decision, Policy, attr};
///
/// let policy = Policy::builder()
///     .allow(attr("amount").lt("100"))
///     .block_rule("card_country != ip_country")
///     .build();
///
/// let attrs = Attributes::new()
///     .set("amount", "90")
///     .set("card_country", "US")
///     .set("ip_country", "US");
/// assert_eq!(policy.evaluate(&attrs), Decision::Accept);
/// ```
#[derive(Debug, Default)]
pub struct PolicyBuilder {
    allow: Option<Node>,
    block: Option<Node>,
}

impl PolicyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allow tree, replacing any previous one.
    #[must_use]
    pub fn allow(mut self, node: Node) -> Self {
        self.allow = Some(node);
        self
    }

    /// Set the block tree, replacing any previous one.
    #[must_use]
    pub fn block(mut self, node: Node) -> Self {
        self.block = Some(node);
        self
    }

    /// Parse `rule` with [`parse_rule`](crate::parse_rule) and use it as the allow tree.
    #[must_use]
    pub fn allow_rule(self, rule: &str) -> Self {
        self.allow(crate::parse::parse_rule(rule))
    }

    /// Parse `rule` with [`parse_rule`](crate::parse_rule) and use it as the block tree.
    #[must_use]
    pub fn block_rule(self, rule: &str) -> Self {
        self.block(crate::parse::parse_rule(rule))
    }

    pub fn build(self) -> Policy {
        Policy {
            allow: self.allow.unwrap_or(Node::True),
            block: self.block.unwrap_or(Node::False),
        }
    }
}

/// An allow tree and a block tree. A charge is accepted iff the allow tree
/// holds and the block tree does not.
///
/// Immutable once built; safe to share between threads behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Policy {
    allow: Node,
    block: Node,
}

impl Default for Policy {
    fn default() -> Self {
        PolicyBuilder::new().build()
    }
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// Build a policy from optional rule texts, defaulting as the builder does.
    pub fn from_rules(allow: Option<&str>, block: Option<&str>) -> Self {
        let mut builder = PolicyBuilder::new();
        if let Some(rule) = allow {
            builder = builder.allow_rule(rule);
        }
        if let Some(rule) = block {
            builder = builder.block_rule(rule);
        }
        builder.build()
    }

    #[must_use]
    pub fn allow_tree(&self) -> &Node {
        &self.allow
    }

    #[must_use]
    pub fn block_tree(&self) -> &Node {
        &self.block
    }

    /// Evaluate this policy against a charge's attributes.
    pub fn evaluate(&self, attributes: &Attributes) -> Decision {
        crate::evaluate::evaluate(&self.allow, &self.block, attributes)
    }

    /// Evaluate with the individual allow/block results and timing.
    pub fn evaluate_detailed(&self, attributes: &Attributes) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.allow, &self.block, attributes)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALLOW: {}; BLOCK: {}", self.allow, self.block)
    }
}
