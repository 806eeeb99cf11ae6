//! # nqueens-rs: backtracking N-Queens in Rust
//!
//! Places N queens on an N×N board so that no two share a row, a column or a
//! diagonal, by depth-first backtracking with incremental conflict tracking.
//!
//! ## Quick Start
//!
//! ```rust
//! use nqueens_rs::search::{solve, solve_with_symmetry, Mode};
//!
//! let all = solve(8, Mode::All);
//! assert_eq!(all.len(), 92);
//!
//! let first = solve(8, Mode::First);
//! assert_eq!(first[0].columns(), &[0, 4, 7, 5, 2, 6, 1, 3]);
//!
//! assert_eq!(solve_with_symmetry(8).len(), 92);
//! ```
//!
//! For finer control use [`Solver`][crate::search::Solver] with a
//! [`SolverConfig`][crate::search::SolverConfig]:
//!
//! ```rust
//! use nqueens_rs::search::{Encoding, Solver, SolverConfig};
//! use nqueens_rs::sink::Count;
//!
//! let config = SolverConfig::default()
//!     .with_encoding(Encoding::Bitmask)
//!     .with_symmetry(true);
//! let mut sink = Count::new();
//! let stats = Solver::new(config).run(10, &mut sink)?;
//! println!("{}", stats);
//! # Ok::<(), nqueens_rs::error::Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`board`]**: the placement vector and its occupancy tracks.
//! - **[`oracle`]**: O(1) and O(row) safety checks.
//! - **[`order`]**: column-ordering strategies.
//! - **[`search`]**: the backtracking driver, termination modes and symmetry pruning.
//! - **[`bitmask`]**: the same search over three `u64` masks, plus a fast counter.
//! - **[`sink`]**: where completed solutions go.
//! - **[`render`]**: text output for solutions.
//!
//! Solutions are 0-indexed column vectors: `solution.columns()[row]` is the
//! column of the queen in `row`. Boards of size 2 and 3 have no solutions;
//! this is an empty result, not an error. The empty board (N = 0) has exactly
//! one solution, the empty placement.

pub mod bitmask;
pub mod bitset;
pub mod board;
pub mod error;
pub mod oracle;
pub mod order;
pub mod render;
pub mod search;
pub mod sink;
pub mod solution;
pub mod stats;
