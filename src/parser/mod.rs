mod ast;
mod error;
mod grammar;
mod locations;
mod tokenizer;

use std::rc::Rc;

pub use ast::{Expression, Node, Operator, Variable};
pub use error::SyntaxError;
pub use grammar::MAX_DEPTH;
pub use locations::Location;

const ASSIGN: char = '=';

/// Compiles an assignment such as `a = 2 + (b * 3)` into its target
/// variable and the expression tree of its right-hand side.
pub fn compile(line: &str) -> Result<(Variable, Expression), SyntaxError> {
    let mut halves = line.split(ASSIGN);
    let (Some(lhs), Some(rhs), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(SyntaxError::MalformedAssignment);
    };

    let variable = parse_target(lhs)?;
    let offset = lhs.chars().count() + 1;
    let tokens = grammar::validate(tokenizer::tokenize(rhs, offset)?)?;
    let tree = grammar::build(&tokens)?;
    log::debug!("compiled {variable} = {tree}");
    Ok((variable, Rc::new(tree)))
}

fn parse_target(lhs: &str) -> Result<Variable, SyntaxError> {
    let mut chars = lhs.chars().filter(|c| !c.is_whitespace());
    match (chars.next(), chars.next()) {
        (Some(v), None) if v.is_ascii_alphabetic() => Ok(v),
        _ => Err(SyntaxError::InvalidTarget(lhs.trim().to_string())),
    }
}

#[cfg(test)]
mod test;
