use thiserror::Error;

use super::grammar::MAX_DEPTH;
use super::locations::Location;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected a single assignment of the form <variable>=<expression>")]
    MalformedAssignment,
    #[error("the assigned variable must be a single letter, found \"{0}\"")]
    InvalidTarget(String),
    #[error("empty expression provided")]
    EmptyExpression,
    #[error("negative values are not currently supported ({0})")]
    UnaryMinus(Location),
    #[error("literals with more than one digit are not supported ({0})")]
    MultiDigitLiteral(Location),
    #[error("variable names must be a single letter ({0})")]
    MultiLetterName(Location),
    #[error("operator '{1}' is missing its left operand ({0})")]
    MisplacedOperator(Location, char),
    #[error("operator before ')' is missing its right operand ({0})")]
    MissingOperand(Location),
    #[error("implicit multiplication is not supported ({0})")]
    ImplicitMultiplication(Location),
    #[error("empty parentheses ({0})")]
    EmptyParentheses(Location),
    #[error("parentheses do not match")]
    UnbalancedParentheses,
    #[error("unexpected character '{1}' ({0})")]
    InvalidCharacter(Location, char),
    #[error("expression ends with operator '{0}'")]
    TrailingOperator(char),
    #[error("expression nests deeper than {} levels ({0})", MAX_DEPTH)]
    NestingTooDeep(Location),
    #[error("expression does not reduce to a single tree")]
    IncompleteExpression,
}
