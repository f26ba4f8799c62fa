//! Fixed-width set of letter positions
//!
//! Records at which positions of a secret a letter has been confirmed.
//! Backed by a single `u32`, so words are limited to [`Positions::CAPACITY`] letters.

/// A set of position indices in `0..Positions::CAPACITY`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Positions(u32);

impl Positions {
    /// Highest supported word length
    pub const CAPACITY: usize = u32::BITS as usize;

    /// The empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a position to the set
    ///
    /// # Panics
    /// Panics if `index >= CAPACITY`
    #[inline]
    pub fn insert(&mut self, index: usize) {
        assert!(index < Self::CAPACITY, "position {index} out of range");
        self.0 |= 1 << index;
    }

    /// Check whether a position is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1 << index) != 0
    }

    /// Number of positions in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..Self::CAPACITY).filter(move |&i| self.contains(i))
    }
}

impl FromIterator<usize> for Positions {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut positions = Self::new();
        for index in iter {
            positions.insert(index);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let positions = Positions::new();
        assert!(positions.is_empty());
        assert_eq!(positions.len(), 0);
        assert!(!positions.contains(0));
    }

    #[test]
    fn insert_and_contains() {
        let mut positions = Positions::new();
        positions.insert(0);
        positions.insert(4);
        positions.insert(4);

        assert!(positions.contains(0));
        assert!(positions.contains(4));
        assert!(!positions.contains(1));
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn highest_position() {
        let mut positions = Positions::new();
        positions.insert(Positions::CAPACITY - 1);
        assert!(positions.contains(31));
        assert!(!positions.contains(Positions::CAPACITY));
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn iter_is_ascending() {
        let positions: Positions = [7, 2, 5].into_iter().collect();
        assert_eq!(positions.iter().collect::<Vec<_>>(), vec![2, 5, 7]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn position_past_capacity_panics() {
        let mut positions = Positions::new();
        positions.insert(Positions::CAPACITY);
    }
}
