//! Cell positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell by zero-indexed row and column.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }
}

/// Spreadsheet-style label, `(0, 0)` -> `A1`, `(9, 27)` -> `AB10`.
impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut remaining = self.col + 1;
        while remaining > 0 {
            let digit = (remaining - 1) % 26;
            letters.push(b'A' + digit as u8);
            remaining = (remaining - 1) / 26;
        }
        letters.reverse();
        let letters = String::from_utf8_lossy(&letters);
        write!(f, "{}{}", letters, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_display_labels_columns_bijectively() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(2, 25).to_string(), "Z3");
        assert_eq!(CellRef::new(9, 26).to_string(), "AA10");
        assert_eq!(CellRef::new(99, 27).to_string(), "AB100");
        assert_eq!(CellRef::new(0, 52).to_string(), "BA1");
    }

    #[test]
    fn test_positions_order_row_major() {
        let mut cells = vec![CellRef::new(1, 0), CellRef::new(0, 5), CellRef::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![CellRef::new(0, 1), CellRef::new(0, 5), CellRef::new(1, 0)]);
    }
}
