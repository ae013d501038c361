//! Property-based tests for decoding and interpolation.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use arcanum_integers::{Fraction, Integer};

    use crate::{decode, solve, SolveError};

    /// Standard positional encoding, lowercase digits above 9.
    fn encode(mut v: u64, base: u32) -> String {
        if v == 0 {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        while v > 0 {
            let d = u32::try_from(v % u64::from(base)).unwrap();
            digits.push(char::from_digit(d, base).unwrap());
            v /= u64::from(base);
        }
        digits.iter().rev().collect()
    }

    /// Horner evaluation over integers, highest degree first.
    fn evaluate(coeffs: &[i64], x: i64) -> Integer {
        coeffs.iter().fold(Integer::zero(), |acc, &c| {
            acc * &Integer::new(x) + Integer::new(c)
        })
    }

    /// Distinct x-coordinates paired with random integer coefficients
    /// of matching degree.
    fn interpolation_input() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
        prop::collection::btree_set(-20i64..20, 1..6).prop_flat_map(|xs| {
            let xs: Vec<i64> = xs.into_iter().collect();
            let len = xs.len();
            (Just(xs), prop::collection::vec(-100i64..100, len))
        })
    }

    proptest! {
        #[test]
        fn decode_round_trips_all_bases(v in 0u64..1_000_000, base in 2u32..=36) {
            let lower = encode(v, base);
            prop_assert_eq!(decode(&lower, base).unwrap(), Integer::from(v as i64));
            let upper = lower.to_uppercase();
            prop_assert_eq!(decode(&upper, base).unwrap(), Integer::from(v as i64));
        }

        #[test]
        fn decode_rejects_digit_at_or_above_base(base in 2u32..36) {
            // The digit equal to the base itself is always one too large.
            let ch = char::from_digit(base, 36).unwrap();
            let value: String = ['1', ch].iter().collect();
            prop_assert_eq!(
                decode(&value, base),
                Err(SolveError::InvalidDigit { digit: ch, base })
            );
        }

        #[test]
        fn solve_recovers_integer_coefficients((xs, coeffs) in interpolation_input()) {
            let ys: Vec<Integer> = xs.iter().map(|&x| evaluate(&coeffs, x)).collect();
            let xs: Vec<Integer> = xs.iter().copied().map(Integer::new).collect();

            let solved = solve(&xs, &ys).unwrap();
            let expected: Vec<Fraction> = coeffs.iter().map(|&c| Fraction::from(c)).collect();
            prop_assert_eq!(solved, expected);
        }

        #[test]
        fn solve_rejects_any_duplicate_x(
            xs in prop::collection::btree_set(-20i64..20, 2..5),
            dup_index in any::<prop::sample::Index>(),
        ) {
            let mut xs: Vec<i64> = xs.into_iter().collect();
            let dup = xs[dup_index.index(xs.len())];
            xs.push(dup);

            let ys: Vec<Integer> = (0..xs.len() as i64).map(Integer::new).collect();
            let xs: Vec<Integer> = xs.into_iter().map(Integer::new).collect();
            let result = solve(&xs, &ys);
            let singular = matches!(result, Err(SolveError::SingularSystem { column: _ }));
            prop_assert!(singular, "expected a singular system, got {:?}", result);
        }
    }
}
