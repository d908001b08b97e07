//! Probability models for the binary coder.
//!
//! The coder never inspects the context window itself; it asks a [`Model`]
//! for the probability of the next bit being 1 given the window's population
//! count. Swapping in a different model changes the compression behavior
//! without touching the interval arithmetic, as long as encoder and decoder
//! agree on the model bit-exactly.

/// Fixed-point scale for probabilities: values represent `p = value / FIXED_SCALE`.
pub const FIXED_SCALE: u32 = 1 << 16;

/// A probability oracle for the next bit.
///
/// Implementations must be pure functions of `(count_ones, context_length)`
/// and should return values in `1..FIXED_SCALE`; the coder clamps out-of-range
/// results to keep its interval invariants, but a clamped model loses the
/// probabilities it meant to express.
pub trait Model {
    /// Fixed-point probability that the next bit is 1, given that
    /// `count_ones` of the last `context_length` coded bits were 1.
    fn probability_of_one(&self, count_ones: usize, context_length: usize) -> u32;
}

/// Reference model: add-one (Laplace) smoothing over the context window.
///
/// Estimates `p1 = (count_ones + 1) / (context_length + 2)` in fixed point
/// with round-half-up, clamped to `1..FIXED_SCALE`. An empty window yields
/// `FIXED_SCALE / 2` through the same formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaplaceModel;

impl Model for LaplaceModel {
    #[inline]
    fn probability_of_one(&self, count_ones: usize, context_length: usize) -> u32 {
        let numerator = count_ones as u64 + 1;
        let denominator = context_length as u64 + 2;
        let p1 = (numerator * FIXED_SCALE as u64 + denominator / 2) / denominator;
        (p1 as u32).clamp(1, FIXED_SCALE - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_window_is_even_odds() {
        assert_eq!(LaplaceModel.probability_of_one(0, 0), FIXED_SCALE / 2);
    }

    #[test]
    fn test_all_zero_window() {
        // (0 + 1) * 65536 / 6 with rounding: 65539 / 6 = 10923.
        assert_eq!(LaplaceModel.probability_of_one(0, 4), 10923);
    }

    #[test]
    fn test_balanced_window() {
        // (2 + 1) * 65536 / 6 rounds to exactly half scale.
        assert_eq!(LaplaceModel.probability_of_one(2, 4), 32768);
    }

    #[test]
    fn test_clamps_high() {
        // A count past the window length is out of contract but must still clamp.
        assert_eq!(LaplaceModel.probability_of_one(10, 1), FIXED_SCALE - 1);
    }

    #[test]
    fn test_monotonic_in_count() {
        let k = 16;
        let mut last = 0;
        for count in 0..=k {
            let p = LaplaceModel.probability_of_one(count, k);
            assert!(p > last);
            last = p;
        }
    }

    proptest! {
        #[test]
        fn prop_output_in_valid_range(
            context_length in 0usize..=2_048_000,
            count_fraction in 0.0f64..=1.0,
        ) {
            let count_ones = (context_length as f64 * count_fraction) as usize;
            let p = LaplaceModel.probability_of_one(count_ones, context_length);
            prop_assert!(p >= 1);
            prop_assert!(p < FIXED_SCALE);
        }

        #[test]
        fn prop_symmetric_around_half(context_length in 0usize..=1000) {
            // Flipping every bit in the window flips the probability.
            for count in 0..=context_length {
                let p1 = LaplaceModel.probability_of_one(count, context_length) as i64;
                let p0 = LaplaceModel.probability_of_one(context_length - count, context_length) as i64;
                prop_assert!((p1 + p0 - FIXED_SCALE as i64).abs() <= 1);
            }
        }
    }
}
