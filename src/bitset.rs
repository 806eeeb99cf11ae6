//! Fixed-capacity bit set used as an occupancy track.
//!
//! A board of size N needs one track of N bits for columns and two tracks of
//! 2N-1 bits for the diagonals. The capacity is fixed when the board is
//! allocated and never grows during search.

/// A fixed-capacity bit set backed by a vector of u64 words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit set able to hold indices in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            capacity,
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.capacity,
            "index {} out of range for bit set of capacity {}",
            index,
            self.capacity
        );
        (index / Self::BITS_PER_WORD, 1u64 << (index % Self::BITS_PER_WORD))
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Sets the bit at `index`. Returns true if it was previously clear.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_clear = self.words[word] & mask == 0;
        self.words[word] |= mask;
        was_clear
    }

    /// Clears the bit at `index`. Returns true if it was previously set.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_set = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_set
    }
}
