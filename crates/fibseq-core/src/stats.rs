//! Aggregates over a realized sequence.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Count, maximum, sum, and average of a generated sequence.
///
/// The maximum is the last element: the sequence is non-decreasing from its
/// second element, and the first element (0) is never larger than what follows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceStats {
    count: usize,
    max: Option<BigUint>,
    sum: BigUint,
}

impl SequenceStats {
    /// Compute the aggregates of `values` in generation order.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a BigUint>,
    {
        let mut stats = Self::default();
        for value in values {
            stats.count += 1;
            stats.sum += value;
            stats.max = Some(value.clone());
        }
        stats
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when no element was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Largest (last) element, `None` for an empty sequence.
    #[must_use]
    pub fn max(&self) -> Option<&BigUint> {
        self.max.as_ref()
    }

    #[must_use]
    pub fn sum(&self) -> &BigUint {
        &self.sum
    }

    /// `sum / count` as a float; `None` when the sequence is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum.to_f64()? / self.count as f64)
    }

    /// Exact `sum / count` rounded half-up to `decimals` places.
    ///
    /// ```
    /// use fibseq_core::stats::SequenceStats;
    /// use num_bigint::BigUint;
    /// let values: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]
    ///     .into_iter()
    ///     .map(BigUint::from)
    ///     .collect();
    /// let stats = SequenceStats::from_values(&values);
    /// assert_eq!(stats.format_average(2).as_deref(), Some("19.33"));
    /// ```
    #[must_use]
    pub fn format_average(&self, decimals: u32) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        let count = BigUint::from(self.count);
        let scale = BigUint::from(10u32).pow(decimals);
        let scaled = (&self.sum * &scale + (&count >> 1u32)) / &count;
        let (whole, frac) = scaled.div_rem(&scale);
        if decimals == 0 {
            return Some(whole.to_string());
        }
        Some(format!("{whole}.{frac:0>width$}", width = decimals as usize))
    }
}

impl Serialize for SequenceStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SequenceStats", 4)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("max", &self.max.as_ref().map(ToString::to_string))?;
        state.serialize_field("sum", &self.sum.to_string())?;
        state.serialize_field("average", &self.format_average(2))?;
        state.end()
    }
}
