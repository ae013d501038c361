//! Property-based tests for exact fraction arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{DivisionByZero, Fraction, Integer};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::from_i64(n, d).unwrap())
    }

    proptest! {
        // Constructor invariants

        #[test]
        fn constructed_fraction_is_normalized(n in small_int(), d in non_zero_int()) {
            let r = Fraction::from_i64(n, d).unwrap();
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        }

        #[test]
        fn zero_denominator_always_rejected(n in small_int()) {
            prop_assert_eq!(Fraction::from_i64(n, 0), Err(DivisionByZero));
        }

        // Field axioms

        #[test]
        fn add_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in fraction(), b in fraction(), c in fraction()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_distributes_over_add(a in fraction(), b in fraction(), c in fraction()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn sub_then_add_round_trips(a in fraction(), b in fraction()) {
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn mul_by_recip_is_one(a in fraction()) {
            prop_assume!(!a.is_zero());
            prop_assert!((&a * &a.recip().unwrap()).is_one());
        }

        #[test]
        fn div_inverts_mul(a in fraction(), b in fraction()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        // Arithmetic results stay normalized

        #[test]
        fn arithmetic_preserves_invariants(a in fraction(), b in fraction()) {
            for r in [&a + &b, &a - &b, &a * &b] {
                prop_assert!(!r.denominator().is_negative());
                prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            }
        }

        #[test]
        fn from_integer_has_unit_denominator(n in small_int()) {
            let r = Fraction::from(Integer::new(n));
            prop_assert!(r.is_integer());
            prop_assert_eq!(r.to_integer().unwrap().to_i64(), Some(n));
        }
    }
}
