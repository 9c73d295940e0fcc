//! Action Counter Tables.
//!
//! Each action owns one flat table of `u64` counters whose length is the
//! product of its argument cardinalities. An argument tuple is addressed with
//! a little-endian mixed-radix encoding: argument 0 varies fastest.
//!
//! ```text
//! cardinalities = [4, 3]          index = v0 * 1 + v1 * 4
//!
//!   v1\v0   0   1   2   3
//!     0     0   1   2   3
//!     1     4   5   6   7
//!     2     8   9  10  11
//! ```

use super::schema::{Action, ActionSchema};
use crate::common::CountError;

/// Encodes an argument tuple into a flat table index.
///
/// Both slices must have the same length and every `arg_values[i]` must be
/// below `cardinalities[i]`; use [`checked_flatten`] for untrusted input.
pub fn flatten(arg_values: &[usize], cardinalities: &[usize]) -> usize {
    debug_assert_eq!(arg_values.len(), cardinalities.len());
    let mut offset = 1;
    let mut index = 0;
    for (value, card) in arg_values.iter().zip(cardinalities) {
        index += value * offset;
        offset *= card;
    }
    index
}

/// Recovers the argument tuple stored at a flat table index.
///
/// `index` must be below the product of `cardinalities`; use
/// [`checked_decode`] for untrusted input.
pub fn decode(index: usize, cardinalities: &[usize]) -> Vec<usize> {
    let mut offset = 1;
    cardinalities
        .iter()
        .map(|&card| {
            let value = (index / offset) % card;
            offset *= card;
            value
        })
        .collect()
}

/// Validates an argument tuple against an action and returns its flat index.
///
/// # Returns
///
/// * `ArityMismatch` if the tuple length differs from the action's arity.
/// * `IndexOutOfRange` for the first value at or above its cardinality.
pub fn checked_flatten(action: &Action, arg_values: &[usize]) -> Result<usize, CountError> {
    if arg_values.len() != action.arity() {
        return Err(CountError::ArityMismatch {
            action: action.name().to_string(),
            expected: action.arity(),
            actual: arg_values.len(),
        });
    }

    for (position, (&value, &limit)) in arg_values
        .iter()
        .zip(action.cardinalities())
        .enumerate()
    {
        if value >= limit {
            return Err(CountError::IndexOutOfRange {
                action: action.name().to_string(),
                position,
                value,
                limit,
            });
        }
    }

    Ok(flatten(arg_values, action.cardinalities()))
}

/// Decodes a flat index of `action`, rejecting indices past its table size.
pub fn checked_decode(action: &Action, index: usize) -> Result<Vec<usize>, CountError> {
    if index >= action.table_size() {
        return Err(CountError::IndexOutOfRange {
            action: action.name().to_string(),
            position: action.arity(),
            value: index,
            limit: action.table_size(),
        });
    }
    Ok(decode(index, action.cardinalities()))
}

/// Per-leaf counter storage, one flat table per schema action.
///
/// Tables are stored in schema order, so the position returned by
/// [`ActionSchema::position`] addresses the matching table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTable {
    tables: Vec<Vec<u64>>,
}

impl CounterTable {
    /// Allocates zeroed tables sized by each action's `table_size`.
    pub fn new(schema: &ActionSchema) -> Self {
        let tables = schema
            .actions()
            .iter()
            .map(|a| vec![0; a.table_size()])
            .collect();
        Self { tables }
    }

    /// All cells of the table at `action_idx`, in flat-index order, or
    /// `None` if the schema has no action at that position.
    pub fn cells(&self, action_idx: usize) -> Option<&[u64]> {
        self.tables.get(action_idx).map(Vec::as_slice)
    }

    /// Length of the table at `action_idx`.
    pub fn table_size(&self, action_idx: usize) -> Option<usize> {
        self.tables.get(action_idx).map(Vec::len)
    }

    /// Value of one cell, or `None` if either index is past its table.
    pub fn get(&self, action_idx: usize, index: usize) -> Option<u64> {
        self.tables.get(action_idx)?.get(index).copied()
    }

    /// Adds `delta` to one cell and returns the cell's new value.
    ///
    /// The cell is left untouched when the sum would overflow.
    pub(crate) fn add(
        &mut self,
        action: &Action,
        action_idx: usize,
        index: usize,
        delta: u64,
    ) -> Result<u64, CountError> {
        let cell = &mut self.tables[action_idx][index];
        let updated = cell
            .checked_add(delta)
            .ok_or_else(|| CountError::CounterOverflow {
                action: action.name().to_string(),
                index,
                delta,
            })?;
        *cell = updated;
        Ok(updated)
    }

    /// Iterates the nonzero cells of one table as `(flat index, count)`.
    ///
    /// An unknown `action_idx` yields nothing.
    pub fn nonzero(&self, action_idx: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.cells(action_idx)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count != 0)
            .map(|(index, &count)| (index, count))
    }

    /// Sum of every cell in one table, saturating at `u64::MAX`.
    pub fn total(&self, action_idx: usize) -> u64 {
        self.cells(action_idx)
            .unwrap_or_default()
            .iter()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }
}
