//! Constants for request defaults, input ranges, and exit codes.

use std::ops::RangeInclusive;

/// Default element count for count-bounded generation.
pub const DEFAULT_COUNT: u64 = 10;

/// Default threshold for value-bounded generation.
pub const DEFAULT_LIMIT: u64 = 100;

/// Count range offered by the interactive front end.
///
/// The algorithm itself has no upper bound; this only applies when a caller
/// asks for strict range checking.
pub const COUNT_RANGE: RangeInclusive<u64> = 1..=50;

/// Limit range offered by the interactive front end.
pub const LIMIT_RANGE: RangeInclusive<u64> = 1..=1000;

/// Maximum Fibonacci index whose value fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_INDEX_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A fixed-width computation overflowed.
    pub const ERROR_OVERFLOW: i32 = 2;
    /// Invalid argument or configuration.
    pub const ERROR_INVALID_ARGUMENT: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(
            FIB_TABLE[MAX_FIB_INDEX_U64 as usize],
            12_200_160_415_121_876_738
        );
        assert!(FIB_TABLE[93].checked_add(FIB_TABLE[92]).is_none());
    }

    #[test]
    fn defaults_inside_ranges() {
        assert!(COUNT_RANGE.contains(&DEFAULT_COUNT));
        assert!(LIMIT_RANGE.contains(&DEFAULT_LIMIT));
    }
}
