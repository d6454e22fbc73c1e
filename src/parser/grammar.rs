// Right-hand side grammar:
//
//   expression: operand (operator operand)*
//   operand:    NUMBER | NAME | '(' expression ')'
//   operator:   '+' | '-' | '*' | '/'
//
// NUMBER is a single digit and NAME a single letter. There is no unary
// operator and no implicit multiplication. The checks below run token by
// token against the previously accepted token, starting from the implicit
// opening parenthesis that wraps the whole expression.

use super::ast::{Node, Operator};
use super::error::SyntaxError;
use super::tokenizer::{Token, TokenType as TT};

/// Checks the tokens against the grammar and wraps them in one outer
/// parenthesis pair, ready for [`build`].
pub(super) fn validate(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let Some(last) = tokens.last() else {
        return Err(SyntaxError::EmptyExpression);
    };
    let end = last.location.column + 1;
    let start = tokens[0].location.column;

    let mut validated = Vec::with_capacity(tokens.len() + 2);
    validated.push(Token::new(TT::LPAR, '(', start));
    let mut depth = 0usize;

    for token in tokens {
        let previous = validated.last().map_or(TT::LPAR, |t: &Token| t.typ);
        let loc = token.location;
        match token.typ {
            TT::NUMBER => match previous {
                TT::NUMBER => return Err(SyntaxError::MultiDigitLiteral(loc)),
                TT::NAME | TT::RPAR => return Err(SyntaxError::ImplicitMultiplication(loc)),
                _ => {}
            },
            TT::NAME => match previous {
                TT::NAME => return Err(SyntaxError::MultiLetterName(loc)),
                TT::NUMBER | TT::RPAR => return Err(SyntaxError::ImplicitMultiplication(loc)),
                _ => {}
            },
            TT::PLUS | TT::MINUS | TT::STAR | TT::SLASH => {
                if previous.is_operator() || previous == TT::LPAR {
                    if token.typ == TT::MINUS {
                        return Err(SyntaxError::UnaryMinus(loc));
                    }
                    return Err(SyntaxError::MisplacedOperator(loc, token.lexeme));
                }
            }
            TT::LPAR => {
                if previous.is_operand() || previous == TT::RPAR {
                    return Err(SyntaxError::ImplicitMultiplication(loc));
                }
                depth += 1;
            }
            TT::RPAR => {
                if depth == 0 {
                    return Err(SyntaxError::UnbalancedParentheses);
                }
                if previous == TT::LPAR {
                    return Err(SyntaxError::EmptyParentheses(loc));
                }
                if previous.is_operator() {
                    return Err(SyntaxError::MissingOperand(loc));
                }
                depth -= 1;
            }
        }
        validated.push(token);
    }

    if depth != 0 {
        return Err(SyntaxError::UnbalancedParentheses);
    }
    if let Some(last) = validated.last().filter(|t| t.typ.is_operator()) {
        return Err(SyntaxError::TrailingOperator(last.lexeme));
    }
    validated.push(Token::new(TT::RPAR, ')', end));
    Ok(validated)
}

/// Precedence used when an incoming token decides whether stacked
/// operators are reduced first.
fn precedence(typ: TT) -> u8 {
    match typ {
        TT::RPAR => 4,
        TT::STAR | TT::SLASH => 3,
        TT::PLUS | TT::MINUS => 2,
        TT::LPAR => 1,
        TT::NAME | TT::NUMBER => 0,
    }
}

/// Deepest tree `build` accepts. Dropping, printing and comparing trees
/// recurse once per level.
pub const MAX_DEPTH: usize = 1024;

/// Shunting-yard construction over validated tokens. Operands are kept with
/// the depth of their subtree.
pub(super) fn build(tokens: &[Token]) -> Result<Node, SyntaxError> {
    let mut operators: Vec<&Token> = Vec::new();
    let mut operands: Vec<(Node, usize)> = Vec::new();

    for token in tokens {
        match token.typ {
            TT::NUMBER => operands.push((digit(token)?, 1)),
            TT::NAME => operands.push((Node::Variable(token.lexeme), 1)),
            TT::LPAR => operators.push(token),
            TT::RPAR => {
                while operators.last().is_some_and(|top| top.typ != TT::LPAR) {
                    reduce(&mut operators, &mut operands)?;
                }
                if operators.pop().is_none() {
                    return Err(SyntaxError::UnbalancedParentheses);
                }
            }
            TT::PLUS | TT::MINUS | TT::STAR | TT::SLASH => {
                while operators
                    .last()
                    .is_some_and(|top| precedence(top.typ) >= precedence(token.typ))
                {
                    reduce(&mut operators, &mut operands)?;
                }
                operators.push(token);
            }
        }
    }
    while !operators.is_empty() {
        reduce(&mut operators, &mut operands)?;
    }

    match (operands.pop(), operands.is_empty()) {
        (Some((root, _)), true) => Ok(root),
        _ => Err(SyntaxError::IncompleteExpression),
    }
}

fn digit(token: &Token) -> Result<Node, SyntaxError> {
    token
        .lexeme
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .map(Node::Digit)
        .ok_or(SyntaxError::InvalidCharacter(token.location, token.lexeme))
}

fn reduce(
    operators: &mut Vec<&Token>,
    operands: &mut Vec<(Node, usize)>,
) -> Result<(), SyntaxError> {
    let Some(token) = operators.pop() else {
        return Err(SyntaxError::IncompleteExpression);
    };
    let op = Operator::try_from(token.lexeme).map_err(|_| SyntaxError::UnbalancedParentheses)?;
    match (operands.pop(), operands.pop()) {
        (Some((rhs, rhs_depth)), Some((lhs, lhs_depth))) => {
            let depth = 1 + lhs_depth.max(rhs_depth);
            if depth > MAX_DEPTH {
                return Err(SyntaxError::NestingTooDeep(token.location));
            }
            operands.push((Node::binary(op, lhs, rhs), depth));
            Ok(())
        }
        _ => Err(SyntaxError::IncompleteExpression),
    }
}
