use thiserror::Error;

use crate::parser::{SyntaxError, Variable};

/// Why a single command was rejected. The calculator state is left
/// untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid arithmetic expression provided: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Cyclic dependency found: '{0}' is already a dependency in another expression")]
    Cycle(Variable),
}
