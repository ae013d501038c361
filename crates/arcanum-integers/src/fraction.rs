//! Normalized exact fractions.
//!
//! A `Fraction` is a pair of arbitrary precision integers kept in lowest
//! terms with a positive denominator. Construction rejects a zero
//! denominator outright rather than producing a poisoned value, and every
//! arithmetic operation returns a freshly normalized fraction, so the
//! invariants hold for every value a caller can ever observe.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

use crate::Integer;

/// Attempted to construct a fraction with a zero denominator, either
/// directly or through the reciprocal of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivisionByZero;

/// An exact rational number in lowest terms.
///
/// Invariants: the denominator is always positive and coprime with the
/// numerator, so structural equality coincides with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: Integer,
    den: Integer,
}

impl Fraction {
    /// Creates a fraction from numerator and denominator.
    ///
    /// The sign moves to the numerator and both parts are divided by
    /// their gcd, so `new(4, -8)` yields `-1/2`.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `den` is zero.
    pub fn new(num: Integer, den: Integer) -> Result<Self, DivisionByZero> {
        if den.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self::normalized(num, den))
    }

    /// Creates a fraction from an integer (denominator 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            num: n,
            den: Integer::one(),
        }
    }

    /// Creates a fraction from i64 parts.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `den` is zero.
    pub fn from_i64(num: i64, den: i64) -> Result<Self, DivisionByZero> {
        Self::new(Integer::new(num), Integer::new(den))
    }

    // den must be nonzero here. gcd(0, den) = den, so zero normalizes
    // to 0/1 without a special case.
    fn normalized(num: Integer, den: Integer) -> Self {
        let (num, den) = if den.is_negative() {
            (-num, -den)
        } else {
            (num, den)
        };
        let g = num.gcd(&den);
        Self {
            num: num / &g,
            den: den / &g,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns the numerator if the fraction is an integer.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.num.clone())
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if the fraction is zero.
    pub fn recip(&self) -> Result<Self, DivisionByZero> {
        Self::new(self.den.clone(), self.num.clone())
    }

    /// Divides by another fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        Self::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// The cross-multiplication denominators below are products of nonzero
// denominators, so the infallible normalizing constructor applies.
impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Fraction {
        Fraction::normalized(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Fraction {
        Fraction::normalized(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Fraction {
        Fraction::normalized(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl From<Integer> for Fraction {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}
