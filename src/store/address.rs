//! Sheet addressing.
//!
//! The roster store speaks 1-based rows and columns (`A1` notation), while
//! the rest of the crate works with 0-based indexes into the fetched rows.
//! Every conversion between the two goes through this module.

use std::fmt;

/// A 1-based cell position, as the store addresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetPos {
    pub row: u32,
    pub col: u32,
}

impl SheetPos {
    /// Build a store position from 0-based row/column indexes.
    pub fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: sheet_row(row),
            col: col as u32 + 1,
        }
    }

    /// 0-based row index of this position.
    pub fn row_index(&self) -> usize {
        row_index(self.row)
    }

    /// 0-based column index of this position.
    pub fn col_index(&self) -> usize {
        self.col.saturating_sub(1) as usize
    }

    /// A1-style reference, e.g. `D7`.
    pub fn a1(&self) -> String {
        format!("{}{}", column_letters(self.col_index()), self.row)
    }
}

impl fmt::Display for SheetPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.a1())
    }
}

/// 1-based store row for a 0-based row index.
pub fn sheet_row(index: usize) -> u32 {
    index as u32 + 1
}

/// 0-based row index for a 1-based store row.
pub fn row_index(row: u32) -> usize {
    row.saturating_sub(1) as usize
}

/// Column letters for a 0-based column index (0 -> A, 25 -> Z, 26 -> AA).
pub fn column_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}
