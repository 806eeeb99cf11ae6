//! Text rendering of solutions.

use crate::solution::Solution;

/// One string per row: `'.' * c + 'Q' + '.' * (N - c - 1)`.
pub fn compact(solution: &Solution) -> Vec<String> {
    let n = solution.size();
    solution
        .columns()
        .iter()
        .map(|&c| {
            let mut row = String::with_capacity(n);
            row.extend((0..n).map(|i| if i == c { 'Q' } else { '.' }));
            row
        })
        .collect()
}

/// Multi-line grid with space-separated cells, one line per row.
pub fn grid(solution: &Solution) -> String {
    let mut out = String::new();
    for row in compact(solution) {
        let cells: Vec<String> = row.chars().map(String::from).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
