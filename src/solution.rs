use std::fmt;

/// A complete, conflict-free placement: `columns()[row]` is the column of
/// the queen in `row`, 0-indexed.
///
/// Solutions are owned copies taken when the search reaches a full board;
/// they never alias the working placement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution(Vec<usize>);

impl Solution {
    pub fn new(columns: Vec<usize>) -> Self {
        Solution(columns)
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    /// Reflects the placement across the vertical axis: `c -> N - 1 - c`.
    ///
    /// # Panics
    ///
    /// Panics if a column is out of range.
    pub fn mirror(&self) -> Solution {
        let n = self.size();
        assert!(
            self.0.iter().all(|&c| c < n),
            "cannot mirror {}: column out of range for N = {}",
            self,
            n
        );
        Solution(self.0.iter().map(|&c| n - 1 - c).collect())
    }

    /// Checks that every column is in range and no two queens share a
    /// column or a diagonal.
    pub fn is_valid(&self) -> bool {
        let n = self.size();
        let cols = &self.0;
        cols.iter().all(|&c| c < n)
            && (0..n).all(|i| {
                (i + 1..n).all(|j| cols[i] != cols[j] && cols[i].abs_diff(cols[j]) != j - i)
            })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_mirror() {
        let s = Solution::new(vec![1, 3, 0, 2]);
        assert_eq!(s.mirror(), Solution::new(vec![2, 0, 3, 1]));
        assert_eq!(s.mirror().mirror(), s);
    }

    #[test]
    fn test_is_valid() {
        assert!(Solution::new(vec![1, 3, 0, 2]).is_valid());
        assert!(Solution::new(vec![0]).is_valid());
        assert!(Solution::new(vec![]).is_valid());
        // same column
        assert!(!Solution::new(vec![1, 1, 3, 0]).is_valid());
        // same diagonal
        assert!(!Solution::new(vec![0, 1, 3, 2]).is_valid());
        // out of range
        assert!(!Solution::new(vec![1, 3, 0, 4]).is_valid());
    }

    #[test]
    #[should_panic(expected = "column out of range")]
    fn test_mirror_rejects_out_of_range_column() {
        Solution::new(vec![1, 3, 0, 4]).mirror();
    }

    #[test]
    fn test_display() {
        assert_eq!(Solution::new(vec![1, 3, 0, 2]).to_string(), "[1, 3, 0, 2]");
    }
}
