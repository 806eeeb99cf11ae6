use std::fmt;
use std::time::Duration;

/// Counters collected during one search.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Search nodes entered, including the root.
    pub nodes: u64,
    /// Queens placed.
    pub placements: u64,
    /// Queens removed again after their subtree was explored.
    pub backtracks: u64,
    /// Attacked squares among the columns a row may branch over (the left
    /// half of row 0 under symmetry pruning, the whole row otherwise).
    ///
    /// Agrees across encodings, oracles and orders when every solution is
    /// enumerated. In first-solution mode the set encoding stops inside a
    /// row and leaves its remaining columns uncounted.
    pub prunings: u64,
    /// Complete placements reached by the search itself (mirrors excluded).
    pub solutions: u64,
    pub elapsed: Duration,
}

impl Stats {
    #[inline]
    pub fn on_node(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn on_place(&mut self) {
        self.placements += 1;
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks += 1;
    }

    #[inline]
    pub fn on_pruning(&mut self) {
        self.prunings += 1;
    }

    #[inline]
    pub fn on_solution(&mut self) {
        self.solutions += 1;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search statistics:")?;
        writeln!(f, "  Nodes:       {}", self.nodes)?;
        writeln!(f, "  Placements:  {}", self.placements)?;
        writeln!(f, "  Backtracks:  {}", self.backtracks)?;
        writeln!(f, "  Prunings:    {}", self.prunings)?;
        writeln!(f, "  Solutions:   {}", self.solutions)?;
        write!(f, "  Time:        {:.2?}", self.elapsed)
    }
}
