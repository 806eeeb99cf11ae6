//! Safety checks: can a queen go on `(row, col)` without being attacked?
//!
//! Two implementations answer the same question:
//!
//! - [`Occupancy`] consults the board's occupancy tracks, O(1) per query.
//! - [`Scan`] walks the placement vector and compares against every placed
//!   queen, O(row) per query. It ignores the tracks entirely, which makes it
//!   a useful cross-check for them.
//!
//! Neither mutates the board.

use crate::board::Board;

pub trait SafetyOracle {
    /// Returns `false` iff a placed queen shares a column or diagonal with `(row, col)`.
    fn is_safe(&self, board: &Board, row: usize, col: usize) -> bool;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy;

impl SafetyOracle for Occupancy {
    #[inline]
    fn is_safe(&self, board: &Board, row: usize, col: usize) -> bool {
        !(board.column_occupied(col) || board.rising_occupied(row, col) || board.falling_occupied(row, col))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scan;

impl SafetyOracle for Scan {
    fn is_safe(&self, board: &Board, row: usize, col: usize) -> bool {
        board.placement().iter().enumerate().all(|(r, placed)| match *placed {
            Some(c) => c != col && c.abs_diff(col) != r.abs_diff(row),
            None => true,
        })
    }
}

/// Runtime selection between the oracles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleKind {
    #[default]
    Occupancy,
    Scan,
}

impl SafetyOracle for OracleKind {
    #[inline]
    fn is_safe(&self, board: &Board, row: usize, col: usize) -> bool {
        match self {
            OracleKind::Occupancy => Occupancy.is_safe(board, row, col),
            OracleKind::Scan => Scan.is_safe(board, row, col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn sample_board() -> Board {
        let mut board = Board::new(6);
        board.place(0, 1);
        board.place(1, 3);
        board
    }

    #[test]
    fn test_occupancy_oracle() {
        let board = sample_board();
        let safe: Vec<usize> = (0..6).filter(|&c| Occupancy.is_safe(&board, 2, c)).collect();
        // columns 1 and 3 are taken, 2 and 4 lie on diagonals of (1, 3)
        assert_eq!(safe, vec![0, 5]);
    }

    #[test]
    fn test_oracles_agree() {
        let board = sample_board();
        for row in 2..6 {
            for col in 0..6 {
                assert_eq!(
                    Occupancy.is_safe(&board, row, col),
                    Scan.is_safe(&board, row, col),
                    "oracles disagree at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_query_does_not_mutate() {
        let board = sample_board();
        let before = board.placement().to_vec();
        for col in 0..6 {
            OracleKind::Occupancy.is_safe(&board, 2, col);
            OracleKind::Scan.is_safe(&board, 2, col);
        }
        assert_eq!(board.placement(), before.as_slice());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_empty_board_is_all_safe() {
        let board = Board::new(4);
        assert!((0..4).all(|c| Occupancy.is_safe(&board, 0, c)));
        assert!((0..4).all(|c| Scan.is_safe(&board, 0, c)));
    }
}
