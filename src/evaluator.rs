use std::collections::{BTreeSet, HashMap};

use crate::parser::{Node, Operator, Variable};

/// Variables referenced by an expression that have no value yet.
pub type Dependencies = BTreeSet<Variable>;

/// Currently resolved variable values.
pub type Values = HashMap<Variable, i32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Value(i32),
    /// Never empty.
    Unresolved(Dependencies),
}

enum Step<'a> {
    Visit(&'a Node),
    Apply(Operator),
}

/// Reduces `tree` against `values`.
///
/// Intermediate results are kept as floats and truncated towards zero only
/// once, for the whole expression, so `7/2*2` yields 7. Unknown variables
/// contribute 0 to the arithmetic; the whole tree is still walked so that
/// every missing variable is reported.
pub fn evaluate(tree: &Node, values: &Values) -> Evaluation {
    let mut missing = Dependencies::new();
    let mut steps = vec![Step::Visit(tree)];
    let mut operands: Vec<f32> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Node::Digit(d)) => operands.push(f32::from(*d)),
            Step::Visit(Node::Variable(v)) => match values.get(v) {
                Some(value) => operands.push(*value as f32),
                None => {
                    missing.insert(*v);
                    operands.push(0.0);
                }
            },
            Step::Visit(Node::Binary(op, lhs, rhs)) => {
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(rhs));
                steps.push(Step::Visit(lhs));
            }
            Step::Apply(op) => {
                let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                    unreachable!("binary node evaluated without both operands");
                };
                operands.push(op.apply(lhs, rhs));
            }
        }
    }

    if !missing.is_empty() {
        return Evaluation::Unresolved(missing);
    }
    Evaluation::Value(operands.pop().unwrap_or_default() as i32)
}
