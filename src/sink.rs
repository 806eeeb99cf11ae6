//! Destinations for completed solutions.

use crate::solution::Solution;

/// Receives solutions as the search completes them.
///
/// The search hands over an owned [`Solution`] and keeps mutating its own
/// working placement afterwards, so sinks never observe partial boards.
pub trait SolutionSink {
    fn record(&mut self, solution: Solution);

    /// Number of solutions recorded so far.
    fn count(&self) -> usize;
}

/// Keeps every solution in the order it was recorded.
#[derive(Debug, Default, Clone)]
pub struct Collect {
    solutions: Vec<Solution>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl SolutionSink for Collect {
    fn record(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    fn count(&self) -> usize {
        self.solutions.len()
    }
}

/// Counts solutions and discards them.
#[derive(Debug, Default, Clone, Copy)]
pub struct Count {
    count: usize,
}

impl Count {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionSink for Count {
    fn record(&mut self, _solution: Solution) {
        self.count += 1;
    }

    fn count(&self) -> usize {
        self.count
    }
}

impl<S: SolutionSink + ?Sized> SolutionSink for &mut S {
    fn record(&mut self, solution: Solution) {
        (**self).record(solution)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}
