//! Partial queen placement with incrementally maintained occupancy.
//!
//! # Encoding
//!
//! The board is never materialised as an N×N grid. Instead it keeps:
//!
//! - a **placement vector** mapping each row to the column of its queen
//!   (`None` while the row is empty);
//! - three **occupancy tracks**: columns (N bits), rising diagonals and
//!   falling diagonals (2N-1 bits each).
//!
//! Rising diagonals are keyed by `row - col`, shifted by `N - 1` so the key is
//! never negative. Falling diagonals are keyed by `row + col`.
//!
//! # Invariant
//!
//! The tracks always reflect exactly the queens currently in the placement
//! vector. [`Board::place`] and [`Board::unplace`] update all three tracks
//! in lockstep from the same `(row, col)` pair.

use crate::bitset::BitSet;
use crate::solution::Solution;

/// Mutable search state for one solve call.
#[derive(Debug, Clone)]
pub struct Board {
    n: usize,
    placement: Vec<Option<usize>>,
    placed: usize,
    cols: BitSet,
    rising: BitSet,
    falling: BitSet,
}

impl Board {
    /// Creates an empty `n`×`n` board.
    pub fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            placement: vec![None; n],
            placed: 0,
            cols: BitSet::new(n),
            rising: BitSet::new(diagonals),
            falling: BitSet::new(diagonals),
        }
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Column of the queen in `row`, if any.
    #[inline]
    pub fn get(&self, row: usize) -> Option<usize> {
        self.placement[row]
    }

    /// Number of rows holding a queen.
    #[inline]
    pub fn placed(&self) -> usize {
        self.placed
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placed == self.n
    }

    /// Raw placement vector, one entry per row.
    pub fn placement(&self) -> &[Option<usize>] {
        &self.placement
    }

    #[inline]
    fn rising_key(&self, row: usize, col: usize) -> usize {
        row + self.n - 1 - col
    }

    #[inline]
    fn falling_key(row: usize, col: usize) -> usize {
        row + col
    }

    #[inline]
    pub fn column_occupied(&self, col: usize) -> bool {
        self.cols.contains(col)
    }

    /// Whether the `row - col` diagonal through `(row, col)` holds a queen.
    #[inline]
    pub fn rising_occupied(&self, row: usize, col: usize) -> bool {
        self.rising.contains(self.rising_key(row, col))
    }

    /// Whether the `row + col` diagonal through `(row, col)` holds a queen.
    #[inline]
    pub fn falling_occupied(&self, row: usize, col: usize) -> bool {
        self.falling.contains(Self::falling_key(row, col))
    }

    /// Puts a queen on `(row, col)`.
    ///
    /// The caller must have checked the square is safe. Placing onto an
    /// occupied row, column or diagonal is a logic error and trips a debug
    /// assertion.
    pub fn place(&mut self, row: usize, col: usize) {
        debug_assert!(
            self.placement[row].is_none(),
            "row {} already holds a queen",
            row
        );
        let rising = self.rising_key(row, col);
        let fresh_col = self.cols.insert(col);
        let fresh_rising = self.rising.insert(rising);
        let fresh_falling = self.falling.insert(Self::falling_key(row, col));
        debug_assert!(
            fresh_col && fresh_rising && fresh_falling,
            "queen at ({}, {}) conflicts with an existing queen",
            row,
            col
        );
        self.placement[row] = Some(col);
        self.placed += 1;
    }

    /// Removes the queen from `row` and returns the column it occupied.
    ///
    /// # Panics
    ///
    /// Panics if `row` is empty.
    pub fn unplace(&mut self, row: usize) -> usize {
        let col = self.placement[row]
            .take()
            .unwrap_or_else(|| panic!("row {} holds no queen", row));
        let rising = self.rising_key(row, col);
        let had_col = self.cols.remove(col);
        let had_rising = self.rising.remove(rising);
        let had_falling = self.falling.remove(Self::falling_key(row, col));
        debug_assert!(
            had_col && had_rising && had_falling,
            "occupancy out of sync when removing ({}, {})",
            row,
            col
        );
        self.placed -= 1;
        col
    }

    /// Copies the placement into an owned [`Solution`] if every row is filled.
    pub fn snapshot(&self) -> Option<Solution> {
        if !self.is_complete() {
            return None;
        }
        self.placement
            .iter()
            .copied()
            .collect::<Option<Vec<usize>>>()
            .map(Solution::new)
    }

    /// Recomputes the occupancy tracks from the placement vector and checks
    /// they match the incrementally maintained ones.
    pub fn is_consistent(&self) -> bool {
        let mut cols = BitSet::new(self.cols.capacity());
        let mut rising = BitSet::new(self.rising.capacity());
        let mut falling = BitSet::new(self.falling.capacity());
        let mut placed = 0;
        for (row, col) in self.placement.iter().enumerate() {
            if let Some(col) = *col {
                cols.insert(col);
                rising.insert(self.rising_key(row, col));
                falling.insert(Self::falling_key(row, col));
                placed += 1;
            }
        }
        placed == self.placed && cols == self.cols && rising == self.rising && falling == self.falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(8);
        assert_eq!(board.size(), 8);
        assert_eq!(board.placed(), 0);
        assert!(!board.is_complete());
        assert!(board.placement().iter().all(Option::is_none));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_place_marks_all_tracks() {
        let mut board = Board::new(4);
        board.place(1, 2);
        assert_eq!(board.get(1), Some(2));
        assert!(board.column_occupied(2));
        // (0, 1) and (2, 3) share the row - col diagonal with (1, 2)
        assert!(board.rising_occupied(0, 1));
        assert!(board.rising_occupied(2, 3));
        // (0, 3) and (3, 0) share the row + col diagonal with (1, 2)
        assert!(board.falling_occupied(0, 3));
        assert!(board.falling_occupied(3, 0));
        assert!(!board.column_occupied(0));
        assert!(!board.rising_occupied(0, 0));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_unplace_restores_state() {
        let mut board = Board::new(5);
        board.place(0, 0);
        board.place(1, 2);
        assert_eq!(board.unplace(1), 2);
        assert_eq!(board.get(1), None);
        assert!(!board.column_occupied(2));
        assert!(!board.rising_occupied(1, 2));
        assert!(!board.falling_occupied(1, 2));
        assert!(board.column_occupied(0));
        assert_eq!(board.placed(), 1);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_snapshot_only_when_complete() {
        let mut board = Board::new(4);
        board.place(0, 1);
        board.place(1, 3);
        board.place(2, 0);
        assert!(board.snapshot().is_none());
        board.place(3, 2);
        assert!(board.is_complete());
        let solution = board.snapshot().unwrap();
        assert_eq!(solution.columns(), &[1, 3, 0, 2]);

        // The snapshot is independent of later mutation.
        board.unplace(3);
        assert_eq!(solution.columns(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_empty_board_is_complete() {
        let board = Board::new(0);
        assert!(board.is_complete());
        assert_eq!(board.snapshot(), Some(Solution::new(vec![])));
    }

    #[test]
    #[should_panic(expected = "holds no queen")]
    fn test_unplace_empty_row_panics() {
        let mut board = Board::new(4);
        board.unplace(2);
    }
}
