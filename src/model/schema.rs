//! Action Schema.
//!
//! Describes the set of countable actions of a leaf component. Each action
//! has a name and a cardinality vector; the arity is the vector's length and
//! every entry is the exclusive upper bound of the argument at that position.
//! A schema is immutable once the leaf that owns it has been created.

use crate::common::CountError;

/// A named, parameterized event type a leaf can record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    name: String,
    cardinalities: Vec<usize>,
    table_size: usize,
}

impl Action {
    /// Creates an action with the given per-argument cardinalities.
    ///
    /// # Arguments
    ///
    /// * `name` - Action name, unique within its schema.
    /// * `cardinalities` - Exclusive upper bound for each argument position.
    ///   An empty vector declares an arity-0 action.
    ///
    /// # Returns
    ///
    /// `InvalidCardinality` if an entry is zero or the product of all entries
    /// overflows `usize`.
    pub fn new(name: impl Into<String>, cardinalities: Vec<usize>) -> Result<Self, CountError> {
        let name = name.into();
        let table_size = cardinalities
            .iter()
            .try_fold(1usize, |acc, &c| if c == 0 { None } else { acc.checked_mul(c) });

        match table_size {
            Some(table_size) => Ok(Self {
                name,
                cardinalities,
                table_size,
            }),
            None => Err(CountError::InvalidCardinality {
                action: name,
                cardinalities,
            }),
        }
    }

    /// Creates an arity-0 action.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinalities: Vec::new(),
            table_size: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.cardinalities.len()
    }

    pub fn cardinalities(&self) -> &[usize] {
        &self.cardinalities
    }

    /// Number of counter cells: the product of the cardinalities, 1 for arity 0.
    pub fn table_size(&self) -> usize {
        self.table_size
    }
}

/// Ordered collection of a leaf's actions.
///
/// Declaration order is preserved and is the order actions appear in the
/// action-count report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionSchema {
    actions: Vec<Action>,
}

impl ActionSchema {
    /// Builds a schema, rejecting repeated action names with `DuplicateAction`.
    pub fn new(actions: Vec<Action>) -> Result<Self, CountError> {
        for (i, action) in actions.iter().enumerate() {
            if actions[..i].iter().any(|a| a.name == action.name) {
                return Err(CountError::DuplicateAction {
                    action: action.name.clone(),
                });
            }
        }
        Ok(Self { actions })
    }

    /// Builds a schema of arity-0 actions from their names.
    pub fn simple<I, S>(names: I) -> Result<Self, CountError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Action::simple).collect())
    }

    /// Looks up an action and its position in the schema.
    pub fn position(&self, name: &str) -> Option<(usize, &Action)> {
        self.actions
            .iter()
            .enumerate()
            .find(|(_, a)| a.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.position(name).map(|(_, a)| a)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
