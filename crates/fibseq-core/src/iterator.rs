//! Lazy Fibonacci iterator using the standard additive recurrence.

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0). Every iterator owns
/// its own `a, b` state, so two iterators never observe each other.
///
/// # Example
/// ```
/// use fibseq_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
    index: u64,
    cap: Option<u64>,
}

impl FibIterator {
    /// Unbounded iterator starting at F(0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
            index: 0,
            cap: None,
        }
    }

    /// Iterator that stops after `cap` elements.
    #[must_use]
    pub fn with_cap(cap: u64) -> Self {
        Self {
            cap: Some(cap),
            ..Self::new()
        }
    }

    /// Index of the next element to be yielded.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.index
    }

    fn exhausted(&self) -> bool {
        self.cap.is_some_and(|cap| self.index >= cap)
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }
        let val = self.a.clone();
        let idx = self.index;
        let next = &self.a + &self.b;
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
        Some((idx, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cap {
            Some(cap) => {
                let left = usize::try_from(cap.saturating_sub(self.index)).unwrap_or(usize::MAX);
                (left, Some(left))
            }
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FibIterator {}

/// Fresh unbounded Fibonacci sequence.
#[must_use]
pub fn sequence() -> FibIterator {
    FibIterator::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten() {
        let vals: Vec<u64> = FibIterator::new()
            .take(10)
            .map(|(_, v)| v.try_into().unwrap())
            .collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn yields_correct_indices() {
        let indices: Vec<u64> = FibIterator::new().take(5).map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn cap_limits_length() {
        let iter = FibIterator::with_cap(3);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        let vals: Vec<_> = iter.collect();
        assert_eq!(vals.len(), 3);
        assert_eq!(vals[2], (2, BigUint::from(1u32)));
    }

    #[test]
    fn cap_zero_is_empty() {
        assert_eq!(FibIterator::with_cap(0).next(), None);
    }

    #[test]
    fn capped_iterator_stays_exhausted() {
        let mut iter = FibIterator::with_cap(1);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.position(), 1);
    }

    #[test]
    fn restarts_from_zero() {
        let mut first = sequence();
        first.nth(20);
        let (idx, val) = sequence().next().unwrap();
        assert_eq!(idx, 0);
        assert!(val.is_zero());
    }

    #[test]
    fn past_u64_range() {
        let (idx, val) = FibIterator::new().nth(94).unwrap();
        assert_eq!(idx, 94);
        assert_eq!(val.to_string(), "19740274219868223167");
    }

    #[test]
    fn size_hint_saturates_for_huge_cap() {
        let iter = FibIterator::with_cap(u64::MAX);
        let expected = usize::try_from(u64::MAX).unwrap_or(usize::MAX);
        assert_eq!(iter.size_hint(), (expected, Some(expected)));
    }
}
