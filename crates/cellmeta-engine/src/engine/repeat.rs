//! Tiling an autofill source across its target.
//!
//! When the target is larger than the source, the source's shape repeats
//! across it from the target's top-left corner. The last tile on each axis is
//! clipped to the target bounds when the target size isn't a multiple of the
//! source size.

use serde::{Deserialize, Serialize};

use super::cell_ref::CellRef;
use super::range::Range;

/// One placement of the source shape inside the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRange {
    /// Where the tile's top-left lands.
    pub repeat_start_cell: CellRef,
    /// Offsets covered by this tile, always starting at (0, 0).
    pub relative_range: Range,
}

/// Tile `source` across `target`, row-major.
///
/// The placements partition `target`: every target cell is covered by exactly
/// one `repeat_start_cell + offset` with the offset inside that placement's
/// `relative_range`.
pub fn get_auto_fill_repeat_range(source: &Range, target: &Range) -> Vec<RepeatRange> {
    let source_rows = source.row_count();
    let source_cols = source.col_count();
    let target_rows = target.row_count();
    let target_cols = target.col_count();

    let mut repeats =
        Vec::with_capacity(target_rows.div_ceil(source_rows) * target_cols.div_ceil(source_cols));
    for row_offset in (0..target_rows).step_by(source_rows) {
        for col_offset in (0..target_cols).step_by(source_cols) {
            repeats.push(RepeatRange {
                repeat_start_cell: CellRef::new(
                    target.start_row + row_offset,
                    target.start_column + col_offset,
                ),
                relative_range: Range::new(
                    0,
                    0,
                    (source_rows - 1).min(target_rows - row_offset - 1),
                    (source_cols - 1).min(target_cols - col_offset - 1),
                ),
            });
        }
    }
    repeats
}
