use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;
use crate::evaluator::{evaluate, Dependencies, Evaluation};
use crate::parser::{compile, Variable};
use crate::state::State;

const RESULT_COMMAND: &str = "result";
const UNDO_COMMAND: &str = "undo";

const S_RESULT: &str = concatcp!("^", RESULT_COMMAND, "$");
const S_UNDO: &str = concatcp!("^", UNDO_COMMAND, " ([^ ]*)$");
const S_LEADING_INTEGER: &str = r"^\s*([+-]?[0-9]+)";

static RESULT: Lazy<Regex> = Lazy::new(|| Regex::new(S_RESULT).expect("Error compiling regex."));
static UNDO: Lazy<Regex> = Lazy::new(|| Regex::new(S_UNDO).expect("Error compiling regex."));
static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_LEADING_INTEGER).expect("Error compiling regex."));

/// Undo argument used when the given count is not a number.
const INVALID_UNDO_COUNT: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Result,
    Undo(i32),
    Assign(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        if RESULT.is_match(line) {
            return Self::Result;
        }
        if let Some(captures) = UNDO.captures(line) {
            return Self::Undo(undo_count(&captures[1]));
        }
        Self::Assign(line)
    }
}

/// Reads the integer the argument starts with, ignoring anything after it.
fn undo_count(argument: &str) -> i32 {
    LEADING_INTEGER
        .captures(argument)
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(INVALID_UNDO_COUNT)
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The assigned variable followed by every dependent resolved in cascade.
    Resolved(Vec<(Variable, i32)>),
    /// The assignment is waiting for the listed variables.
    Deferred(Variable, Dependencies),
    LastResult(Option<(Variable, i32)>),
    Deleted(Vec<Variable>),
}

impl Output {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Resolved(pairs) => pairs.iter().map(|(v, n)| format!("{v} = {n}")).collect(),
            Self::Deferred(..) => vec![],
            Self::LastResult(Some((v, n))) => vec![format!("return {v} = {n}")],
            Self::LastResult(None) => vec![],
            Self::Deleted(variables) => variables.iter().map(|v| format!("delete {v}")).collect(),
        }
    }

    /// Message shown instead of an empty result.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::LastResult(None) => Some("There is no result available yet"),
            Self::Deleted(variables) if variables.is_empty() => Some("No operations were undone"),
            _ => None,
        }
    }
}

/// One calculator session. Sessions share nothing.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    state: State,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn execute(&mut self, line: &str) -> Result<Output, Error> {
        match Command::parse(line) {
            Command::Result => Ok(Output::LastResult(self.state.last_fulfilled())),
            Command::Undo(count) => Ok(Output::Deleted(self.state.undo(count))),
            Command::Assign(assignment) => self.assign(assignment),
        }
    }

    fn assign(&mut self, assignment: &str) -> Result<Output, Error> {
        let (variable, tree) = compile(assignment)?;
        match evaluate(&tree, self.state.values()) {
            Evaluation::Value(value) => {
                let resolved = self.state.store_value(variable, value);
                self.state.record_history(variable);
                Ok(Output::Resolved(resolved))
            }
            Evaluation::Unresolved(missing) => {
                self.state.store_dependencies(variable, tree, &missing)?;
                self.state.record_history(variable);
                log::debug!("'{variable}' waits for {missing:?}");
                Ok(Output::Deferred(variable, missing))
            }
        }
    }
}
