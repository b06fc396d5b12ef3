//! Sparse row/column storage.
//!
//! [`ObjectMatrix`] keeps only the positions that hold a value, nested as
//! `row -> col -> value`. Iteration is ascending by row then column, which
//! matches how the host orders integer-keyed maps on the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectMatrix<T> {
    rows: BTreeMap<usize, BTreeMap<usize, T>>,
}

impl<T> ObjectMatrix<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    pub fn get_value(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(&row)?.get(&col)
    }

    pub fn get_value_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.rows.get_mut(&row)?.get_mut(&col)
    }

    /// Store a value, returning whatever was there before.
    pub fn set_value(&mut self, row: usize, col: usize, value: T) -> Option<T> {
        self.rows.entry(row).or_default().insert(col, value)
    }

    /// Remove a position entirely. Empty rows are dropped as well.
    pub fn real_delete_value(&mut self, row: usize, col: usize) -> Option<T> {
        let columns = self.rows.get_mut(&row)?;
        let removed = columns.remove(&col);
        if columns.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, value)| (row, col, value)))
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for ObjectMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(usize, usize, T)> for ObjectMatrix<T> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, T)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for (row, col, value) in iter {
            matrix.set_value(row, col, value);
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_positions_have_no_entry() {
        let mut matrix = ObjectMatrix::new();
        matrix.set_value(2, 3, "x");
        assert_eq!(matrix.get_value(2, 3), Some(&"x"));
        assert_eq!(matrix.get_value(2, 4), None);
        assert_eq!(matrix.get_value(0, 3), None);
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn test_real_delete_drops_empty_rows() {
        let mut matrix = ObjectMatrix::new();
        matrix.set_value(1, 1, 10);
        assert_eq!(matrix.real_delete_value(1, 1), Some(10));
        assert!(matrix.is_empty());
        assert_eq!(matrix.real_delete_value(1, 1), None);
    }

    #[test]
    fn test_iteration_is_row_major_ascending() {
        let matrix: ObjectMatrix<u8> = [(3, 0, 1), (0, 5, 2), (0, 1, 3)].into_iter().collect();
        let order: Vec<_> = matrix.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 1), (0, 5), (3, 0)]);
        assert_eq!(matrix.len(), 3);
    }

    #[test]
    fn test_serializes_as_nested_string_keyed_maps() {
        let mut matrix = ObjectMatrix::new();
        matrix.set_value(0, 1, true);
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json, serde_json::json!({"0": {"1": true}}));

        let back: ObjectMatrix<bool> = serde_json::from_value(json).unwrap();
        assert_eq!(back, matrix);
    }
}
