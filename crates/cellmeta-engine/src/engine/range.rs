//! Rectangular and discontinuous cell ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell_ref::CellRef;

/// A rectangular range of cells, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_row: usize,
    pub start_column: usize,
    pub end_row: usize,
    pub end_column: usize,
}

impl Range {
    /// Create a new range, automatically normalizing so start <= end.
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        Self {
            start_row: r1.min(r2),
            start_column: c1.min(c2),
            end_row: r1.max(r2),
            end_column: c1.max(c2),
        }
    }

    /// Create a single-cell range.
    pub fn single(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    pub fn start_cell(&self) -> CellRef {
        CellRef::new(self.start_row, self.start_column)
    }

    pub fn row_count(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn col_count(&self) -> usize {
        self.end_column - self.start_column + 1
    }

    /// Iterate over all cells in this range (row-major order).
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (start_row, end_row) = (self.start_row, self.end_row);
        let (start_col, end_col) = (self.start_column, self.end_column);

        (start_row..=end_row).flat_map(move |r| (start_col..=end_col).map(move |c| (r, c)))
    }

    /// Translate a range expressed relative to `origin`'s top-left corner into
    /// absolute coordinates.
    pub fn get_position_range(relative: &Range, origin: &Range) -> Range {
        Range {
            start_row: origin.start_row + relative.start_row,
            start_column: origin.start_column + relative.start_column,
            end_row: origin.start_row + relative.end_row,
            end_column: origin.start_column + relative.end_column,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.start_cell(),
            CellRef::new(self.end_row, self.end_column)
        )
    }
}

/// A selection addressed by explicit row and column indices.
///
/// Hidden rows or columns simply don't appear in the lists, so the selection
/// may have gaps on either axis. Indices are kept sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscreteRange {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl DiscreteRange {
    pub fn new(mut rows: Vec<usize>, mut cols: Vec<usize>) -> Self {
        rows.sort_unstable();
        rows.dedup();
        cols.sort_unstable();
        cols.dedup();
        Self { rows, cols }
    }
}

impl From<Range> for DiscreteRange {
    fn from(range: Range) -> Self {
        Self {
            rows: (range.start_row..=range.end_row).collect(),
            cols: (range.start_column..=range.end_column).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_range_offsets_from_origin_start() {
        let relative = Range::new(0, 1, 1, 2);
        let origin = Range::single(4, 3);
        assert_eq!(Range::get_position_range(&relative, &origin), Range::new(4, 4, 5, 5));
    }

    #[test]
    fn test_new_normalizes_corners() {
        let range = Range::new(3, 2, 0, 0);
        assert_eq!(range, Range::new(0, 0, 3, 2));
        assert_eq!(range.to_string(), "A1:C4");
        assert_eq!((range.row_count(), range.col_count()), (4, 3));
    }

    #[test]
    fn test_range_cells_are_row_major() {
        let cells: Vec<_> = Range::new(0, 0, 1, 1).cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_discrete_range_sorts_and_dedups() {
        let range = DiscreteRange::new(vec![5, 2, 2, 9], vec![1, 0]);
        assert_eq!(range.rows, vec![2, 5, 9]);
        assert_eq!(range.cols, vec![0, 1]);
    }

    #[test]
    fn test_discrete_range_from_contiguous_range() {
        let range = DiscreteRange::from(Range::new(1, 2, 2, 3));
        assert_eq!(range.rows, vec![1, 2]);
        assert_eq!(range.cols, vec![2, 3]);
    }

    #[test]
    fn test_range_serializes_camel_case() {
        let json = serde_json::to_value(Range::single(0, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"startRow": 0, "startColumn": 1, "endRow": 0, "endColumn": 1})
        );
    }
}
