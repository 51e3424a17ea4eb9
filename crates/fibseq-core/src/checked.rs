//! Fixed-width `u64` producer.
//!
//! Unlike the `BigUint` producer this one is bounded by the integer width:
//! F(93) is the largest representable value (see
//! [`MAX_FIB_INDEX_U64`](crate::constants::MAX_FIB_INDEX_U64)), so asking for
//! more than 94 elements fails with [`FibError::ArithmeticOverflow`].

use crate::constants::FIB_TABLE;
use crate::error::FibError;

/// First `n` Fibonacci numbers as `u64`.
///
/// # Errors
///
/// [`FibError::InvalidArgument`] when `n` is 0, [`FibError::ArithmeticOverflow`] when
/// F(n - 1) does not fit in a `u64`.
pub fn first_n(n: u64) -> Result<Vec<(u64, u64)>, FibError> {
    if n < 1 {
        return Err(FibError::invalid(format!(
            "count must be at least 1, got {n}"
        )));
    }
    CheckedFibIterator::new()
        .take(usize::try_from(n).unwrap_or(usize::MAX))
        .collect()
}

/// Every Fibonacci number `<= limit` as `u64`.
///
/// Cannot overflow: the first value past F(93) exceeds every `u64` limit.
#[must_use]
pub fn up_to(limit: u64) -> Vec<u64> {
    FIB_TABLE
        .iter()
        .copied()
        .take_while(|&v| v <= limit)
        .collect()
}

/// Iterator over F(0), F(1), ... that stops with an overflow error.
///
/// Yields `Ok` for every value that fits and a single `Err` at index 94.
#[derive(Debug, Clone)]
pub struct CheckedFibIterator {
    a: Option<u64>,
    b: Option<u64>,
    index: u64,
    done: bool,
}

impl CheckedFibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: Some(0),
            b: Some(1),
            index: 0,
            done: false,
        }
    }
}

impl Default for CheckedFibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CheckedFibIterator {
    type Item = Result<(u64, u64), FibError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(a) = self.a else {
            self.done = true;
            return Some(Err(FibError::ArithmeticOverflow(self.index, "u64")));
        };
        let next = self.b.and_then(|b| a.checked_add(b));
        let idx = self.index;
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
        Some(Ok((idx, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten_u64() {
        let seq = first_n(10).unwrap();
        let values: Vec<u64> = seq.iter().map(|&(_, v)| v).collect();
        assert_eq!(values, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn largest_fitting_request() {
        let seq = first_n(94).unwrap();
        assert_eq!(seq.last(), Some(&(93, 12_200_160_415_121_876_738)));
    }

    #[test]
    fn overflow_past_f93() {
        assert_eq!(first_n(95), Err(FibError::ArithmeticOverflow(94, "u64")));
    }

    #[test]
    fn zero_count_rejected() {
        assert!(matches!(
            first_n(0),
            Err(FibError::InvalidArgument(_))
        ));
    }

    #[test]
    fn up_to_u64_matches_big() {
        assert_eq!(up_to(100), [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
        assert_eq!(up_to(0), [0]);
        assert_eq!(up_to(u64::MAX).len(), 94);
    }

    #[test]
    fn checked_iterator_reports_overflow_once() {
        let items: Vec<_> = CheckedFibIterator::new().collect();
        assert_eq!(items.len(), 95);
        assert_eq!(items[93], Ok((93, 12_200_160_415_121_876_738)));
        assert_eq!(items[94], Err(FibError::ArithmeticOverflow(94, "u64")));
    }
}
