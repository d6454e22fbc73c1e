mod error;
mod evaluator;
mod parser;
mod session;
mod state;

pub use error::Error;
pub use evaluator::{evaluate, Dependencies, Evaluation, Values};
pub use parser::{
    compile, Expression, Location, Node, Operator, SyntaxError, Variable, MAX_DEPTH,
};
pub use session::{Calculator, Command, Output};
pub use state::State;
