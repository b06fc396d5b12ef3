//! Dense virtual coordinates over discontinuous ranges.
//!
//! Range arithmetic (tiling, offsets) is done in a virtual space where every
//! row and column present in any of the input ranges gets a consecutive
//! index. Rows or columns absent from all inputs (hidden ones, for instance)
//! vanish from the virtual space, so a source and a target separated by a
//! hidden row look adjacent.

use super::cell_ref::CellRef;
use super::range::{DiscreteRange, Range};

/// The virtualized counterparts of a list of ranges plus the shared mapping
/// back to real coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualizedRanges {
    /// One entry per input range; `None` for ranges with no rows or no columns.
    pub ranges: Vec<Option<Range>>,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl VirtualizedRanges {
    /// Resolve a virtual coordinate to the real cell it stands for.
    pub fn map(&self, row: usize, col: usize) -> Option<CellRef> {
        Some(CellRef::new(*self.rows.get(row)?, *self.cols.get(col)?))
    }
}

/// Virtualize `ranges` together so they share one coordinate mapping.
pub fn virtualize_discrete_ranges(ranges: &[DiscreteRange]) -> VirtualizedRanges {
    let mut rows: Vec<usize> = ranges.iter().flat_map(|r| r.rows.iter().copied()).collect();
    rows.sort_unstable();
    rows.dedup();
    let mut cols: Vec<usize> = ranges.iter().flat_map(|r| r.cols.iter().copied()).collect();
    cols.sort_unstable();
    cols.dedup();

    let ranges = ranges
        .iter()
        .map(|range| {
            let start_row = index_of(&rows, range.rows.first())?;
            let end_row = index_of(&rows, range.rows.last())?;
            let start_col = index_of(&cols, range.cols.first())?;
            let end_col = index_of(&cols, range.cols.last())?;
            Some(Range::new(start_row, start_col, end_row, end_col))
        })
        .collect();

    VirtualizedRanges { ranges, rows, cols }
}

fn index_of(axis: &[usize], value: Option<&usize>) -> Option<usize> {
    axis.binary_search(value?).ok()
}
