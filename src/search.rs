//! Depth-first backtracking search.
//!
//! # State machine
//!
//! A search node is "at row `r` with rows `0..r` placed". From a node the
//! search tries the row's candidate columns in the order given by the
//! [`ColumnOrder`]; for each column the oracle accepts it places a queen,
//! descends to row `r + 1`, and removes the queen again on return. Reaching
//! row `N` means the board is complete: the placement is copied into a
//! [`Solution`] and handed to the sink.
//!
//! In [`Mode::First`] the first completed board yields [`Control::Stop`].
//! Every call site checks the returned [`Control`] right after the recursive
//! call and unwinds without trying further columns.
//!
//! # Symmetry pruning
//!
//! Reflecting a solution across the vertical axis (`c -> N - 1 - c`) gives
//! another solution. With symmetry enabled the first row only branches over
//! columns `0..ceil(N/2)` and every solution found is recorded together with
//! its mirror, except when the first queen sits in the centre column of an
//! odd board: those solutions have their first queen in the searched range
//! on both sides of the reflection, so their mirrors are found directly.

use std::mem;
use std::time::Instant;

use log::{debug, trace};

use crate::bitmask::BitmaskSearch;
use crate::board::Board;
use crate::error::Result;
use crate::oracle::{Occupancy, OracleKind, SafetyOracle, Scan};
use crate::order::ColumnOrder;
use crate::sink::{Collect, Count, SolutionSink};
use crate::solution::Solution;
use crate::stats::Stats;

/// Termination mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Enumerate every solution.
    #[default]
    All,
    /// Stop at the first complete placement.
    First,
}

/// Signal returned by every recursive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Occupancy encoding used by the search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Placement vector plus bit-set occupancy tracks, see [`Board`].
    #[default]
    Sets,
    /// Three `u64` masks shifted row by row, see [`crate::bitmask`].
    ///
    /// Always scans columns in ascending order and ignores
    /// [`SolverConfig::oracle`] and [`SolverConfig::order`].
    Bitmask,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub mode: Mode,
    pub symmetry: bool,
    pub encoding: Encoding,
    pub oracle: OracleKind,
    pub order: ColumnOrder,
}

impl SolverConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_symmetry(mut self, symmetry: bool) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_oracle(mut self, oracle: OracleKind) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_order(mut self, order: ColumnOrder) -> Self {
        self.order = order;
        self
    }
}

/// Number of first-row columns branched over under symmetry pruning.
pub(crate) fn half_width(n: usize) -> usize {
    n.div_ceil(2)
}

/// Records `solution`, and its mirror when symmetry pruning needs it.
pub(crate) fn record_with_mirror<S: SolutionSink>(sink: &mut S, solution: Solution, mirror: bool) {
    let centre = solution.size() % 2 == 1 && solution.columns()[0] == solution.size() / 2;
    if mirror && solution.size() > 0 && !centre {
        let reflected = solution.mirror();
        sink.record(solution);
        sink.record(reflected);
    } else {
        sink.record(solution);
    }
}

/// Configured N-Queens solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Searches an `n`×`n` board, feeding every solution into `sink`.
    ///
    /// Fails only if the bitmask encoding is selected and `n` exceeds 64.
    pub fn run<S: SolutionSink>(&self, n: usize, sink: &mut S) -> Result<Stats> {
        debug!("run(n = {}, config = {:?})", n, self.config);
        let start = Instant::now();
        let mut stats = match self.config.encoding {
            Encoding::Sets => match self.config.oracle {
                OracleKind::Occupancy => self.run_sets(n, Occupancy, sink),
                OracleKind::Scan => self.run_sets(n, Scan, sink),
            },
            Encoding::Bitmask => BitmaskSearch::new(n, self.config.mode, self.config.symmetry, sink)?.run(),
        };
        stats.elapsed = start.elapsed();
        debug!(
            "run(n = {}) -> {} solutions recorded, {} nodes",
            n,
            sink.count(),
            stats.nodes
        );
        Ok(stats)
    }

    fn run_sets<O: SafetyOracle, S: SolutionSink>(&self, n: usize, oracle: O, sink: &mut S) -> Stats {
        let mut search = Search {
            board: Board::new(n),
            oracle,
            order: self.config.order,
            mode: self.config.mode,
            symmetry: self.config.symmetry && self.config.mode == Mode::All,
            buffers: (0..n).map(|_| Vec::with_capacity(n)).collect(),
            sink,
            stats: Stats::default(),
        };
        search.descend(0);
        debug_assert_eq!(search.board.placed(), 0);
        search.stats
    }

    /// Collects all solutions (or the first one, in [`Mode::First`]).
    pub fn solutions(&self, n: usize) -> Result<Vec<Solution>> {
        let mut sink = Collect::new();
        self.run(n, &mut sink)?;
        Ok(sink.into_solutions())
    }

    /// Counts solutions without keeping them.
    pub fn count(&self, n: usize) -> Result<usize> {
        let mut sink = Count::new();
        self.run(n, &mut sink)?;
        Ok(sink.count())
    }
}

/// State owned by one search: the working board, per-row candidate buffers
/// and the sink. Lives exactly as long as one [`Solver::run`] call.
struct Search<'a, O, S> {
    board: Board,
    oracle: O,
    order: ColumnOrder,
    mode: Mode,
    symmetry: bool,
    buffers: Vec<Vec<usize>>,
    sink: &'a mut S,
    stats: Stats,
}

impl<O: SafetyOracle, S: SolutionSink> Search<'_, O, S> {
    fn descend(&mut self, row: usize) -> Control {
        self.stats.on_node();

        if let Some(solution) = self.board.snapshot() {
            trace!("solution {}", solution);
            self.stats.on_solution();
            record_with_mirror(&mut *self.sink, solution, self.symmetry);
            return match self.mode {
                Mode::All => Control::Continue,
                Mode::First => Control::Stop,
            };
        }

        let mut candidates = mem::take(&mut self.buffers[row]);
        self.order.candidates(&self.board, row, &mut candidates);
        let mut width = self.board.size();
        if row == 0 && self.symmetry {
            width = half_width(width);
            candidates.retain(|&c| c < width);
        }
        // columns an ordering skips up front count as rejected
        self.stats.prunings += (width - candidates.len()) as u64;

        let mut control = Control::Continue;
        for &col in &candidates {
            if !self.oracle.is_safe(&self.board, row, col) {
                self.stats.on_pruning();
                continue;
            }

            self.board.place(row, col);
            self.stats.on_place();
            debug_assert!(self.board.is_consistent());

            control = self.descend(row + 1);

            self.board.unplace(row);
            self.stats.on_backtrack();

            if control == Control::Stop {
                break;
            }
        }

        self.buffers[row] = candidates;
        control
    }
}

/// All solutions (or the first one) by plain left-to-right search.
pub fn solve(n: usize, mode: Mode) -> Vec<Solution> {
    let mut sink = Collect::new();
    let solver = Solver::new(SolverConfig::default().with_mode(mode));
    solver.run_sets(n, Occupancy, &mut sink);
    sink.into_solutions()
}

/// All solutions, branching the first row over its left half and mirroring.
pub fn solve_with_symmetry(n: usize) -> Vec<Solution> {
    let mut sink = Collect::new();
    let solver = Solver::new(SolverConfig::default().with_symmetry(true));
    solver.run_sets(n, Occupancy, &mut sink);
    sink.into_solutions()
}
