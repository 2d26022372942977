//! Resolve-once option cells

use crate::types::OptionError;

/// Per-session cache for one option.
///
/// Starts `Unresolved` and settles exactly once, either on a value or on the
/// decode error. A settled cell is never re-read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Memo<T> {
    Unresolved,
    Resolved(T),
    Invalid(OptionError),
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Memo::Unresolved
    }
}

impl<T: Clone> Memo<T> {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Memo::Unresolved)
    }

    /// The cached outcome, if any.
    pub fn get(&self) -> Option<Result<T, OptionError>> {
        match self {
            Memo::Unresolved => None,
            Memo::Resolved(value) => Some(Ok(value.clone())),
            Memo::Invalid(err) => Some(Err(err.clone())),
        }
    }

    /// Cache `outcome` unless the cell already settled, and return whatever
    /// the cell now holds.
    pub fn settle(&mut self, outcome: Result<T, OptionError>) -> Result<T, OptionError> {
        match self {
            Memo::Unresolved => {
                *self = match &outcome {
                    Ok(value) => Memo::Resolved(value.clone()),
                    Err(err) => Memo::Invalid(err.clone()),
                };
                outcome
            }
            Memo::Resolved(value) => Ok(value.clone()),
            Memo::Invalid(err) => Err(err.clone()),
        }
    }

    /// Return the cached outcome, running `resolve` only for an unresolved cell.
    pub fn get_or_resolve<F>(&mut self, resolve: F) -> Result<T, OptionError>
    where
        F: FnOnce() -> Result<T, OptionError>,
    {
        match self.get() {
            Some(outcome) => outcome,
            None => {
                let outcome = resolve();
                self.settle(outcome)
            }
        }
    }
}
