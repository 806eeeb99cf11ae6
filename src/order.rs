//! Column-ordering strategies.
//!
//! A strategy decides in which order the columns of a row are tried. It does
//! not decide safety: every candidate is still checked by the oracle, so a
//! strategy may only change the order in which solutions are found, never
//! the set of solutions.

use crate::board::Board;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnOrder {
    /// Columns `0, 1, ..., N-1`.
    #[default]
    Ascending,
    /// Free columns, fewest occupied diagonals through the square first,
    /// ties broken by column index.
    MinConflict,
}

impl ColumnOrder {
    /// Writes the candidate columns for `row` into `out`, replacing its contents.
    pub fn candidates(&self, board: &Board, row: usize, out: &mut Vec<usize>) {
        out.clear();
        let n = board.size();
        match self {
            ColumnOrder::Ascending => out.extend(0..n),
            ColumnOrder::MinConflict => {
                out.extend((0..n).filter(|&c| !board.column_occupied(c)));
                out.sort_by_key(|&c| {
                    let conflicts =
                        board.rising_occupied(row, c) as u8 + board.falling_occupied(row, c) as u8;
                    (conflicts, c)
                });
            }
        }
    }
}
