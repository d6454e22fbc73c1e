use pretty_assertions::assert_eq;

use super::{compile, Location, Node, Operator, SyntaxError, MAX_DEPTH};

fn parse_tree_matches(input: &str, tree_repr: &str) {
    let result = compile(input);
    assert!(result.is_ok(), "\nFailed to parse \"{input}\": {result:?}\n");
    if let Ok((_, ref tree)) = result {
        assert_eq!(tree.to_string(), tree_repr, "\nwhile parsing \"{input}\"");
    }
}

fn assert_raises_error(input: &str, expected: SyntaxError) {
    assert_eq!(compile(input), Err(expected), "\nwhile parsing \"{input}\"");
}

fn assert_rejected(inputs: &[&str]) {
    for input in inputs {
        assert!(compile(input).is_err(), "\"{input}\" should not compile");
    }
}

#[test]
fn test_operand_and_tree() {
    let (variable, tree) = compile("a = 5+(1*2)").unwrap();
    assert_eq!(variable, 'a');
    assert_eq!(
        *tree,
        Node::binary(
            Operator::Add,
            Node::Digit(5),
            Node::binary(Operator::Mul, Node::Digit(1), Node::Digit(2)),
        )
    );
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn test_precedence_and_associativity() {
    parse_tree_matches("b = 4+5+7/2", "((4 + 5) + (7 / 2))");
    parse_tree_matches("c=2+3*(1-2)", "(2 + (3 * (1 - 2)))");
    parse_tree_matches("e = 2+3* 1 - 2", "((2 + (3 * 1)) - 2)");
    parse_tree_matches("x=8-3-2", "((8 - 3) - 2)");
    parse_tree_matches("x=8/4/2", "((8 / 4) / 2)");
    parse_tree_matches("x=2*3+4*5", "((2 * 3) + (4 * 5))");
}

#[test]
fn test_parentheses() {
    parse_tree_matches("a = (4 + 5 * (7 - 3)) - 2", "((4 + (5 * (7 - 3))) - 2)");
    parse_tree_matches("g = (2*(3+6/2)/4)", "((2 * (3 + (6 / 2))) / 4)");
    parse_tree_matches("f = 7+3*(1/(2/(3+1)-1))", "(7 + (3 * (1 / ((2 / (3 + 1)) - 1))))");
    parse_tree_matches("x=((7))", "7");
}

#[test]
fn test_variables() {
    parse_tree_matches("b=e-2", "(e - 2)");
    parse_tree_matches("Z = a*B", "(a * B)");
    parse_tree_matches("y=y+1", "(y + 1)");
}

#[test]
fn test_valid_inputs() {
    for input in [
        "a = (4 + 5 * (7 - 3)) - 2",
        "b = 4+5+7/2",
        "c = 2+3*(1-2)",
        "d = 5+(1*2)",
        "e = 2+3* 1 - 2",
        "f = 7+3*(1/(2/(3+1)-1))",
        "g = (2*(3+6/2)/4)",
    ] {
        assert!(compile(input).is_ok(), "\"{input}\" should compile");
    }
}

#[test]
fn test_assignment_shape() {
    assert_raises_error("", SyntaxError::MalformedAssignment);
    assert_raises_error("a+2", SyntaxError::MalformedAssignment);
    assert_raises_error("a==2", SyntaxError::MalformedAssignment);
    assert_raises_error("a=b=2", SyntaxError::MalformedAssignment);
    assert_raises_error("a=", SyntaxError::EmptyExpression);
    assert_raises_error("a=   ", SyntaxError::EmptyExpression);
    assert_raises_error("=2", SyntaxError::InvalidTarget(String::new()));
    assert_raises_error("ab=2", SyntaxError::InvalidTarget("ab".to_string()));
    assert_raises_error("1=2", SyntaxError::InvalidTarget("1".to_string()));
    parse_tree_matches("  q   =3", "3");
}

#[test]
fn test_negative_numbers() {
    assert_rejected(&["a = -1", "b = -22", "c = 2+(-3*2)", "d = (-5)", "e = -(2*3)"]);
    assert_raises_error("a=-1", SyntaxError::UnaryMinus(Location { column: 2 }));
    assert_raises_error("a=2*-1", SyntaxError::UnaryMinus(Location { column: 4 }));
}

#[test]
fn test_multi_digit_literals() {
    assert_rejected(&["a = 42", "b = 1337", "c = 11*11+3-(20)", "d = 10  +  1", "e = 1 2"]);
    assert_raises_error("a=42", SyntaxError::MultiDigitLiteral(Location { column: 3 }));
}

#[test]
fn test_unpaired_parentheses() {
    assert_rejected(&["a = (1+2))", "b = (3*  3", "c = 4+2*(5/7))"]);
    assert_raises_error("b=(3*3", SyntaxError::UnbalancedParentheses);
}

#[test]
fn test_misused_parentheses() {
    assert_rejected(&["a = )1+2(", "b = (3*()3)", "c = 4+2)(*(5/7)", "d = (1)(2)"]);
    assert_raises_error("b=()", SyntaxError::EmptyParentheses(Location { column: 3 }));
    assert_raises_error("b=(1+)", SyntaxError::MissingOperand(Location { column: 5 }));
}

#[test]
fn test_missing_operators() {
    assert_rejected(&["a = (4 + 5 (7 - 3)) - 2", "b = 2+(5*3)7", "c = a(2)", "d = 2a"]);
    assert_raises_error("a=2(1)", SyntaxError::ImplicitMultiplication(Location { column: 3 }));
    assert_raises_error("a=bc", SyntaxError::MultiLetterName(Location { column: 3 }));
}

#[test]
fn test_misused_operators() {
    assert_rejected(&[
        " a = (4 +* 5 - (7 - 3)) - 2",
        "b = 2+(/5*3)7",
        "c = *(4+5)-3",
        "d = +-42",
        "e = 1-3+3/7+",
    ]);
    assert_raises_error("a=*2", SyntaxError::MisplacedOperator(Location { column: 2 }, '*'));
    assert_raises_error("a=2+", SyntaxError::TrailingOperator('+'));
}

#[test]
fn test_invalid_characters() {
    assert_raises_error("a=2^3", SyntaxError::InvalidCharacter(Location { column: 3 }, '^'));
    assert_rejected(&["a=2.5", "a=x_1", "a=[1]"]);
}

#[test]
fn test_nesting_depth() {
    let deepest = format!("a=1{}", "+1".repeat(MAX_DEPTH - 1));
    assert!(compile(&deepest).is_ok());
    let too_deep = format!("a=1{}", "+1".repeat(MAX_DEPTH));
    assert!(matches!(compile(&too_deep), Err(SyntaxError::NestingTooDeep(_))));
    let nested = format!("a={}1{}", "(1+".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(matches!(compile(&nested), Err(SyntaxError::NestingTooDeep(_))));
    parse_tree_matches(&format!("a={}7{}", "(".repeat(4000), ")".repeat(4000)), "7");
}
