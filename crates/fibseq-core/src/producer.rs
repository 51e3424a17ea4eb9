//! Count-bounded and value-bounded consumption of the Fibonacci sequence.
//!
//! Both functions build a fresh [`FibIterator`] per call and share nothing
//! between invocations, so repeated calls with the same input return the
//! same output.

use num_bigint::{BigInt, BigUint};
use tracing::debug;

use crate::error::FibError;
use crate::iterator::FibIterator;

/// First `n` Fibonacci numbers paired with their zero-based index.
///
/// # Errors
///
/// Returns [`FibError::InvalidArgument`] when `n` is 0.
///
/// # Example
/// ```
/// use fibseq_core::generate_first_n;
/// let seq = generate_first_n(4).unwrap();
/// let values: Vec<String> = seq.iter().map(|(_, v)| v.to_string()).collect();
/// assert_eq!(values, ["0", "1", "1", "2"]);
/// ```
pub fn generate_first_n(n: u64) -> Result<Vec<(u64, BigUint)>, FibError> {
    if n < 1 {
        return Err(FibError::invalid(format!(
            "count must be at least 1, got {n}"
        )));
    }
    let seq: Vec<_> = FibIterator::with_cap(n).collect();
    debug!(n, produced = seq.len(), "count-bounded generation");
    Ok(seq)
}

/// Every Fibonacci number up to and including `limit`.
///
/// Scanning stops at the first value greater than `limit`, which is not
/// included.
///
/// # Errors
///
/// Returns [`FibError::InvalidArgument`] when `limit` is negative.
pub fn generate_up_to(limit: &BigInt) -> Result<Vec<BigUint>, FibError> {
    let Some(limit) = limit.to_biguint() else {
        return Err(FibError::invalid(format!(
            "maximum value must not be negative, got {limit}"
        )));
    };
    Ok(collect_up_to(&limit))
}

/// [`generate_up_to`] for a limit that is non-negative by type.
#[must_use]
pub fn generate_up_to_u64(limit: u64) -> Vec<BigUint> {
    collect_up_to(&BigUint::from(limit))
}

fn collect_up_to(limit: &BigUint) -> Vec<BigUint> {
    let seq: Vec<BigUint> = FibIterator::new()
        .map(|(_, value)| value)
        .take_while(|value| value <= limit)
        .collect();
    debug!(%limit, produced = seq.len(), "value-bounded generation");
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_u64(values: &[BigUint]) -> Vec<u64> {
        values.iter().map(|v| u64::try_from(v).unwrap()).collect()
    }

    #[test]
    fn first_one() {
        let seq = generate_first_n(1).unwrap();
        assert_eq!(seq, vec![(0, BigUint::from(0u32))]);
    }

    #[test]
    fn first_ten() {
        let seq = generate_first_n(10).unwrap();
        let expected: Vec<(u64, u64)> = vec![
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 2),
            (4, 3),
            (5, 5),
            (6, 8),
            (7, 13),
            (8, 21),
            (9, 34),
        ];
        let got: Vec<(u64, u64)> = seq
            .iter()
            .map(|(i, v)| (*i, u64::try_from(v).unwrap()))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn first_zero_rejected() {
        assert!(matches!(
            generate_first_n(0),
            Err(FibError::InvalidArgument(_))
        ));
    }

    #[test]
    fn first_n_is_idempotent() {
        assert_eq!(generate_first_n(30).unwrap(), generate_first_n(30).unwrap());
    }

    #[test]
    fn up_to_zero() {
        assert_eq!(to_u64(&generate_up_to(&BigInt::from(0)).unwrap()), [0]);
    }

    #[test]
    fn up_to_one_keeps_both_ones() {
        assert_eq!(to_u64(&generate_up_to(&BigInt::from(1)).unwrap()), [0, 1, 1]);
    }

    #[test]
    fn up_to_hundred() {
        assert_eq!(
            to_u64(&generate_up_to(&BigInt::from(100)).unwrap()),
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]
        );
    }

    #[test]
    fn up_to_exact_fibonacci_is_inclusive() {
        let seq = generate_up_to_u64(89);
        assert_eq!(seq.last(), Some(&BigUint::from(89u32)));
    }

    #[test]
    fn up_to_negative_rejected() {
        let err = generate_up_to(&BigInt::from(-5)).unwrap_err();
        assert!(matches!(err, FibError::InvalidArgument(_)));
    }

    #[test]
    fn up_to_beyond_u64() {
        let limit: BigInt = "100000000000000000000000".parse().unwrap();
        let seq = generate_up_to(&limit).unwrap();
        let last = seq.last().unwrap();
        assert!(BigInt::from(last.clone()) <= limit);
        assert!(seq.len() > 94);
    }
}
