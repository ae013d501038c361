//! Arbitrary-base digit decoding.

use arcanum_integers::Integer;
use num_traits::Zero;

use crate::SolveError;

/// Decodes a digit string in the given base into an exact integer.
///
/// Digits `'0'..='9'` map to 0..=9 and letters map case-insensitively to
/// 10..=35, covering bases up to 36. The value is accumulated left to
/// right as `acc = acc * base + digit`, which is exact over arbitrary
/// precision integers. `base` must lie in `[2, 36]`; callers validate
/// the range before decoding.
///
/// # Errors
///
/// Returns [`SolveError::InvalidDigit`] if any character is not a digit,
/// or maps to a value at or above `base`. The whole string is rejected;
/// there is no partial decoding.
pub fn decode(value: &str, base: u32) -> Result<Integer, SolveError> {
    debug_assert!((2..=36).contains(&base));
    let radix = Integer::from(base);
    let mut acc = Integer::zero();
    for ch in value.chars() {
        let digit = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='z' => 10 + (ch as u32 - 'a' as u32),
            'A'..='Z' => 10 + (ch as u32 - 'A' as u32),
            _ => return Err(SolveError::InvalidDigit { digit: ch, base }),
        };
        if digit >= base {
            return Err(SolveError::InvalidDigit { digit: ch, base });
        }
        acc = acc * &radix + Integer::from(digit);
    }
    Ok(acc)
}
