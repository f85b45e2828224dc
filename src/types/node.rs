use std::fmt;

use super::Attributes;

/// Comparison operators supported in rule expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Boolean connectives joining two comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

/// Evaluation tree produced by [`parse_rule`](crate::parse_rule) or built with
/// [`attr()`].
///
/// `key` always names an attribute. `value` is a literal, except for
/// [`CompareOp::Ne`] where it is first tried as the name of another attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    True,
    False,
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Compare {
        key: String,
        op: CompareOp,
        value: String,
    },
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::Ne => write!(f, "!="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Lte => write!(f, "<="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Gte => write!(f, ">="),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "AND"),
            Connective::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::True => write!(f, "TRUE"),
            Node::False => write!(f, "FALSE"),
            Node::And(a, b) => write!(f, "{a} AND {b}"),
            Node::Or(a, b) => write!(f, "{a} OR {b}"),
            Node::Compare { key, op, value } => write!(f, "{key} {op} {value}"),
        }
    }
}

impl Node {
    #[must_use]
    pub fn and(self, other: Node) -> Node {
        Node::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: Node) -> Node {
        Node::Or(Box::new(self), Box::new(other))
    }

    /// Join two nodes with the given connective.
    #[must_use]
    pub fn join(self, connective: Connective, other: Node) -> Node {
        match connective {
            Connective::And => self.and(other),
            Connective::Or => self.or(other),
        }
    }

    /// Evaluate this tree against a charge's attributes.
    ///
    /// Total: comparisons on absent keys are `false` and non-numeric operands
    /// of ordered comparisons count as `0`.
    #[must_use]
    pub fn evaluate(&self, attributes: &Attributes) -> bool {
        crate::evaluate::eval_node(self, attributes)
    }
}

/// Intermediate builder for comparison leaves.
/// Created by [`attr()`]; requires a comparison method to produce a [`Node`].
#[derive(Debug, Clone)]
pub struct AttrExpr {
    key: String,
}

impl AttrExpr {
    fn compare(self, op: CompareOp, value: &str) -> Node {
        Node::Compare {
            key: self.key,
            op,
            value: value.to_owned(),
        }
    }

    #[must_use]
    pub fn eq(self, value: &str) -> Node {
        self.compare(CompareOp::Eq, value)
    }

    /// Compare against another attribute named `value` if the charge has one,
    /// otherwise against the literal.
    #[must_use]
    pub fn ne(self, value: &str) -> Node {
        self.compare(CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(self, value: &str) -> Node {
        self.compare(CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(self, value: &str) -> Node {
        self.compare(CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(self, value: &str) -> Node {
        self.compare(CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(self, value: &str) -> Node {
        self.compare(CompareOp::Gte, value)
    }
}

#[must_use]
pub fn attr(key: &str) -> AttrExpr {
    AttrExpr {
        key: key.to_owned(),
    }
}
