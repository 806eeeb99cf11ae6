//! Errors surfaced to callers of the solver.
//!
//! The search itself is total: an empty solution list is a valid answer
//! (N = 2 and N = 3 have none) and never an error. Errors only arise when
//! the input cannot describe a board, or when an encoding cannot represent it.

use thiserror::Error;

/// Largest board the bitmask encoding can represent (one bit per column in a `u64`).
pub const MAX_BITMASK_SIZE: usize = u64::BITS as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Board size is negative.
    #[error("invalid board size {0}: must be non-negative")]
    InvalidBoardSize(i64),

    /// Board size exceeds what the chosen encoding can hold.
    #[error("board size {n} is too large for the bitmask encoding (max {max})")]
    BoardTooLarge { n: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Converts an untrusted signed integer into a board size.
///
/// This is the only range check the library performs. Policies such as
/// rejecting `N < 4` belong to the caller.
pub fn board_size(raw: i64) -> Result<usize> {
    usize::try_from(raw).map_err(|_| Error::InvalidBoardSize(raw))
}

/// Checks that `n` fits into the bitmask encoding.
pub fn check_bitmask_size(n: usize) -> Result<()> {
    if n > MAX_BITMASK_SIZE {
        return Err(Error::BoardTooLarge {
            n,
            max: MAX_BITMASK_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_board_size_accepts_non_negative() {
        assert_eq!(board_size(0), Ok(0));
        assert_eq!(board_size(8), Ok(8));
    }

    #[test]
    fn test_board_size_rejects_negative() {
        assert_eq!(board_size(-1), Err(Error::InvalidBoardSize(-1)));
        assert_eq!(board_size(i64::MIN), Err(Error::InvalidBoardSize(i64::MIN)));
    }

    #[test]
    fn test_bitmask_limit() {
        assert!(check_bitmask_size(64).is_ok());
        assert_eq!(
            check_bitmask_size(65),
            Err(Error::BoardTooLarge { n: 65, max: 64 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidBoardSize(-3).to_string(),
            "invalid board size -3: must be non-negative"
        );
    }
}
