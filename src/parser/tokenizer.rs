use derivative::Derivative;

use super::error::SyntaxError;
use super::locations::Location;

#[derive(Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: char,
    #[derivative(PartialEq = "ignore")]
    pub(crate) location: Location,
}

impl Token {
    pub(crate) fn new(typ: TokenType, lexeme: char, column: usize) -> Self {
        Self {
            typ,
            lexeme,
            location: Location::new(column),
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum TokenType {
    NAME,
    NUMBER,
    LPAR,
    RPAR,
    PLUS,
    MINUS,
    STAR,
    SLASH,
}

impl TokenType {
    pub(crate) fn is_operator(&self) -> bool {
        matches!(self, Self::PLUS | Self::MINUS | Self::STAR | Self::SLASH)
    }

    pub(crate) fn is_operand(&self) -> bool {
        matches!(self, Self::NAME | Self::NUMBER)
    }
}

const LPAR: (char, TokenType) = ('(', TokenType::LPAR);
const RPAR: (char, TokenType) = (')', TokenType::RPAR);
const PLUS: (char, TokenType) = ('+', TokenType::PLUS);
const MINUS: (char, TokenType) = ('-', TokenType::MINUS);
const STAR: (char, TokenType) = ('*', TokenType::STAR);
const SLASH: (char, TokenType) = ('/', TokenType::SLASH);

const SIMPLE_TOKENS: [(char, TokenType); 6] = [LPAR, RPAR, PLUS, MINUS, STAR, SLASH];

/// Splits an expression into single-character tokens, dropping whitespace.
/// `offset` is the column of the first character inside the full command line.
pub(crate) fn tokenize(input: &str, offset: usize) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::with_capacity(input.len());
    for (idx, chr) in input.chars().enumerate() {
        let column = offset + idx;
        if chr.is_whitespace() {
            continue;
        }
        let typ = if chr.is_ascii_digit() {
            TokenType::NUMBER
        } else if chr.is_ascii_alphabetic() {
            TokenType::NAME
        } else if let Some((_, typ)) = SIMPLE_TOKENS.iter().find(|(lexeme, _)| *lexeme == chr) {
            *typ
        } else {
            return Err(SyntaxError::InvalidCharacter(Location::new(column), chr));
        };
        tokens.push(Token::new(typ, chr, column));
    }
    Ok(tokens)
}
