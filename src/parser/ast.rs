use std::rc::Rc;

/// A single-letter, case-sensitive variable name.
pub type Variable = char;

/// A compiled right-hand side. Shared between the caller and the pending
/// expression storage, never mutated after the parser hands it out.
pub type Expression = Rc<Node>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub(crate) fn apply(&self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree node. Leaves are single digits or variable references,
/// every binary node owns exactly two children.
#[derive(Clone, PartialEq, Eq)]
pub enum Node {
    Digit(u8),
    Variable(Variable),
    Binary(Operator, Box<Node>, Box<Node>),
}

impl Node {
    pub fn binary(op: Operator, lhs: Node, rhs: Node) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        match self {
            Self::Digit(_) | Self::Variable(_) => 1,
            Self::Binary(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "Digit({d})"),
            Self::Variable(v) => write!(f, "Variable('{v}')"),
            Self::Binary(op, lhs, rhs) => write!(f, "Binary('{op}', {lhs:?}, {rhs:?})"),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Variable(v) => write!(f, "{v}"),
            Self::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}
