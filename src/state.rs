use std::collections::HashMap;

use crate::error::Error;
use crate::evaluator::{evaluate, Dependencies, Evaluation, Values};
use crate::parser::{Expression, Variable};

/// Values, pending expressions, dependency edges and assignment history of
/// one calculator session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    values: Values,
    /// dependency -> every variable whose pending expression referenced it,
    /// in insertion order. Edges are never removed.
    dependents: HashMap<Variable, Vec<Variable>>,
    pending: HashMap<Variable, Expression>,
    history: Vec<Variable>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn pending(&self, variable: Variable) -> Option<&Expression> {
        self.pending.get(&variable)
    }

    pub fn history(&self) -> &[Variable] {
        &self.history
    }

    /// Stores `value` and re-evaluates, depth first, every pending
    /// expression that becomes resolvable. Returns each stored pair in
    /// resolution order, `variable` first.
    pub fn store_value(&mut self, variable: Variable, value: i32) -> Vec<(Variable, i32)> {
        let mut affected = Vec::new();
        let mut path = Vec::new();
        self.resolve(variable, value, &mut path, &mut affected);
        affected
    }

    fn resolve(
        &mut self,
        variable: Variable,
        value: i32,
        path: &mut Vec<Variable>,
        affected: &mut Vec<(Variable, i32)>,
    ) {
        self.values.insert(variable, value);
        affected.push((variable, value));

        let Some(dependents) = self.dependents.get(&variable).cloned() else {
            return;
        };
        path.push(variable);
        for dependent in dependents {
            if path.contains(&dependent) {
                log::warn!(
                    "'{dependent}' is already being resolved, skipping back-edge from '{variable}'"
                );
                continue;
            }
            let Some(tree) = self.pending.get(&dependent).cloned() else {
                continue;
            };
            if let Evaluation::Value(resolved) = evaluate(&tree, &self.values) {
                log::debug!("'{variable}' resolved '{dependent}' = {resolved}");
                self.resolve(dependent, resolved, path, affected);
            }
        }
        path.pop();
    }

    /// Keeps `tree` until `missing` is known. Rejected without any change
    /// when a variable already depending on `variable` is itself missing.
    pub fn store_dependencies(
        &mut self,
        variable: Variable,
        tree: Expression,
        missing: &Dependencies,
    ) -> Result<(), Error> {
        let back_edge = self
            .dependents
            .get(&variable)
            .is_some_and(|dependents| dependents.iter().any(|d| missing.contains(d)));
        if back_edge {
            return Err(Error::Cycle(variable));
        }

        self.pending.insert(variable, tree);
        for dependency in missing {
            self.dependents.entry(*dependency).or_default().push(variable);
        }
        Ok(())
    }

    pub fn record_history(&mut self, variable: Variable) {
        self.history.push(variable);
    }

    /// Most recently assigned variable that currently has a value.
    pub fn last_fulfilled(&self) -> Option<(Variable, i32)> {
        self.history
            .iter()
            .rev()
            .find_map(|v| self.values.get(v).map(|value| (*v, *value)))
    }

    /// Forgets the last `count` history entries, most recent first. A count
    /// that is not positive or exceeds the history changes nothing.
    pub fn undo(&mut self, count: i32) -> Vec<Variable> {
        let Ok(count) = usize::try_from(count) else {
            log::debug!("undo count {count} is negative");
            return vec![];
        };
        if count == 0 || count > self.history.len() {
            log::debug!("undo count {count} outside 1..={}", self.history.len());
            return vec![];
        }

        let mut deleted = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(variable) = self.history.pop() else {
                break;
            };
            self.values.remove(&variable);
            self.pending.remove(&variable);
            deleted.push(variable);
        }
        log::debug!("undid {deleted:?}");
        deleted
    }
}
