use std::time::Instant;

use crate::{Attributes, CompareOp, Decision, EvaluationReport, Node};

pub(crate) fn evaluate(allow: &Node, block: &Node, attributes: &Attributes) -> Decision {
    let allowed = eval_node(allow, attributes);
    let blocked = eval_node(block, attributes);
    Decision::from_outcome(allowed, blocked)
}

pub(crate) fn evaluate_detailed(
    allow: &Node,
    block: &Node,
    attributes: &Attributes,
) -> EvaluationReport {
    let start = Instant::now();
    let allowed = eval_node(allow, attributes);
    let blocked = eval_node(block, attributes);
    EvaluationReport::new(allowed, blocked, start.elapsed())
}

pub(crate) fn eval_node(node: &Node, attributes: &Attributes) -> bool {
    match node {
        Node::True => true,
        Node::False => false,
        // Both sides are always evaluated, left first.
        Node::And(a, b) => {
            let left = eval_node(a, attributes);
            let right = eval_node(b, attributes);
            left && right
        }
        Node::Or(a, b) => {
            let left = eval_node(a, attributes);
            let right = eval_node(b, attributes);
            left || right
        }
        Node::Compare { key, op, value } => attributes
            .get(key)
            .is_some_and(|actual| op.apply(actual, operand(*op, value, attributes))),
    }
}

/// `!=` compares against another attribute when `value` names one.
fn operand<'a>(op: CompareOp, value: &'a str, attributes: &'a Attributes) -> &'a str {
    match op {
        CompareOp::Ne => attributes.get(value).unwrap_or(value),
        _ => value,
    }
}
