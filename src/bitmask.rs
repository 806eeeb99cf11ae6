//! Bitmask encoding of the search.
//!
//! Occupancy is carried in three `u64` masks instead of a [`Board`]:
//!
//! - `cols`: bit `c` set iff column `c` holds a queen;
//! - `rising`: bit `c` set iff square `(row, c)` lies on an occupied
//!   `row - col` diagonal;
//! - `falling`: bit `c` set iff square `(row, c)` lies on an occupied
//!   `row + col` diagonal.
//!
//! Moving from one row to the next, a `row - col` diagonal moves one column
//! right and a `row + col` diagonal moves one column left, so the child masks
//! are `(rising | bit) << 1` and `(falling | bit) >> 1`. Bits shifted past
//! column `N - 1` are cleared with the board mask; bits shifted below column
//! 0 fall off the word.
//!
//! The safe columns of a row are `!(cols | rising | falling) & full`. They
//! are visited lowest bit first (`x & x.wrapping_neg()`), i.e. in ascending
//! column order, which makes the solution order identical to the plain
//! left-to-right search.
//!
//! [`Board`]: crate::board::Board

use log::{debug, trace};

use crate::error::{check_bitmask_size, Result};
use crate::search::{half_width, record_with_mirror, Control, Mode};
use crate::sink::SolutionSink;
use crate::solution::Solution;
use crate::stats::Stats;

/// Mask with the low `n` bits set.
#[inline]
pub fn board_mask(n: usize) -> u64 {
    if n == 0 {
        0
    } else {
        u64::MAX >> (u64::BITS as usize - n)
    }
}

/// Columns of the current row not attacked by any placed queen.
#[inline]
pub fn available(full: u64, cols: u64, rising: u64, falling: u64) -> u64 {
    !(cols | rising | falling) & full
}

/// One bitmask search over an `n`×`n` board.
pub struct BitmaskSearch<'a, S> {
    n: usize,
    full: u64,
    mode: Mode,
    symmetry: bool,
    placement: Vec<usize>,
    sink: &'a mut S,
    stats: Stats,
}

impl<'a, S: SolutionSink> BitmaskSearch<'a, S> {
    /// Fails if `n` does not fit into a `u64`.
    pub fn new(n: usize, mode: Mode, symmetry: bool, sink: &'a mut S) -> Result<Self> {
        check_bitmask_size(n)?;
        Ok(Self {
            n,
            full: board_mask(n),
            mode,
            symmetry: symmetry && mode == Mode::All,
            placement: vec![0; n],
            sink,
            stats: Stats::default(),
        })
    }

    pub fn run(mut self) -> Stats {
        self.descend(0, 0, 0, 0);
        self.stats
    }

    fn descend(&mut self, row: usize, cols: u64, rising: u64, falling: u64) -> Control {
        self.stats.on_node();

        if row == self.n {
            let solution = Solution::new(self.placement.clone());
            trace!("solution {}", solution);
            self.stats.on_solution();
            record_with_mirror(&mut *self.sink, solution, self.symmetry);
            return match self.mode {
                Mode::All => Control::Continue,
                Mode::First => Control::Stop,
            };
        }

        let mut width = self.n;
        let mut free = available(self.full, cols, rising, falling);
        if row == 0 && self.symmetry {
            width = half_width(self.n);
            free &= board_mask(width);
        }
        self.stats.prunings += (width - free.count_ones() as usize) as u64;

        while free != 0 {
            let bit = free & free.wrapping_neg();
            free ^= bit;

            self.placement[row] = bit.trailing_zeros() as usize;
            self.stats.on_place();

            let control = self.descend(
                row + 1,
                cols | bit,
                ((rising | bit) << 1) & self.full,
                (falling | bit) >> 1,
            );

            self.stats.on_backtrack();
            if control == Control::Stop {
                return Control::Stop;
            }
        }

        Control::Continue
    }
}

/// All solutions (or the first one) using the bitmask encoding.
pub fn solve(n: usize, mode: Mode) -> Result<Vec<Solution>> {
    let mut sink = crate::sink::Collect::new();
    BitmaskSearch::new(n, mode, false, &mut sink)?.run();
    Ok(sink.into_solutions())
}

/// All solutions using the bitmask encoding with symmetry pruning.
pub fn solve_with_symmetry(n: usize) -> Result<Vec<Solution>> {
    let mut sink = crate::sink::Collect::new();
    BitmaskSearch::new(n, Mode::All, true, &mut sink)?.run();
    Ok(sink.into_solutions())
}

/// Counts solutions without materialising any placement.
///
/// The first queen is placed only in the left half of row 0 and the count
/// doubled; for odd `n` the centre column is counted once on its own.
pub fn count(n: usize) -> Result<u64> {
    check_bitmask_size(n)?;
    if n == 0 {
        return Ok(1);
    }
    let full = board_mask(n);

    let mut total = 0;
    for col in 0..n / 2 {
        let bit = 1u64 << col;
        total += count_from(full, bit, (bit << 1) & full, bit >> 1);
    }
    total *= 2;
    if n % 2 == 1 {
        let bit = 1u64 << (n / 2);
        total += count_from(full, bit, (bit << 1) & full, bit >> 1);
    }

    debug!("count(n = {}) -> {}", n, total);
    Ok(total)
}

fn count_from(full: u64, cols: u64, rising: u64, falling: u64) -> u64 {
    if cols == full {
        return 1;
    }
    let mut free = available(full, cols, rising, falling);
    let mut total = 0;
    while free != 0 {
        let bit = free & free.wrapping_neg();
        free ^= bit;
        total += count_from(full, cols | bit, ((rising | bit) << 1) & full, (falling | bit) >> 1);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    use crate::error::Error;
    use crate::search;
    use crate::sink::Count;

    #[test]
    fn test_board_mask() {
        assert_eq!(board_mask(0), 0);
        assert_eq!(board_mask(1), 0b1);
        assert_eq!(board_mask(4), 0b1111);
        assert_eq!(board_mask(64), u64::MAX);
    }

    #[test]
    fn test_available() {
        // queen at (0, 1) on a 4x4 board, looking at row 1
        let full = board_mask(4);
        let bit = 0b0010;
        let free = available(full, bit, (bit << 1) & full, bit >> 1);
        assert_eq!(free, 0b1000);
    }

    #[test]
    fn test_count_known() {
        let expected = [1, 1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2680, 14200];
        for (n, &e) in expected.iter().enumerate() {
            assert_eq!(count(n).unwrap(), e, "n = {}", n);
        }
    }

    #[test]
    fn test_same_order_as_sets() {
        for n in 0..=9 {
            assert_eq!(solve(n, Mode::All).unwrap(), search::solve(n, Mode::All), "n = {}", n);
            assert_eq!(solve(n, Mode::First).unwrap(), search::solve(n, Mode::First), "n = {}", n);
        }
    }

    #[test]
    fn test_symmetry_matches_plain() {
        for n in 0..=10 {
            let plain: HashSet<Solution> = solve(n, Mode::All).unwrap().into_iter().collect();
            let mirrored = solve_with_symmetry(n).unwrap();
            assert_eq!(mirrored.len(), plain.len(), "n = {}", n);
            assert_eq!(mirrored.into_iter().collect::<HashSet<_>>(), plain, "n = {}", n);
        }
    }

    #[test]
    fn test_solutions_are_valid() {
        for solution in solve(8, Mode::All).unwrap() {
            assert!(solution.is_valid(), "{}", solution);
        }
    }

    #[test]
    fn test_too_large() {
        assert_eq!(count(65), Err(Error::BoardTooLarge { n: 65, max: 64 }));
        let mut sink = Count::new();
        assert!(BitmaskSearch::new(65, Mode::All, false, &mut sink).is_err());
    }

    #[test]
    fn test_stats_balance() {
        let mut sink = Count::new();
        let stats = BitmaskSearch::new(6, Mode::All, false, &mut sink).unwrap().run();
        assert_eq!(stats.solutions, 4);
        assert_eq!(stats.placements, stats.backtracks);
        assert_eq!(stats.nodes, stats.placements + 1);
    }
}
