//! Secret code generation.

use super::SecretCode;
use crate::constants::{CODE_LENGTH, DIGIT_RADIX};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw a fresh code: five distinct digits, uniformly ordered.
///
/// Digits are drawn until five distinct ones are collected, then the set is
/// shuffled so the final order does not depend on draw order.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> SecretCode {
    let mut digits = [0u8; CODE_LENGTH];
    let mut seen = [false; DIGIT_RADIX as usize];
    let mut count = 0;
    while count < CODE_LENGTH {
        let d = rng.gen_range(0..DIGIT_RADIX);
        if !seen[d as usize] {
            seen[d as usize] = true;
            digits[count] = d;
            count += 1;
        }
    }

    digits.sort_unstable();
    digits.shuffle(rng);

    // digits are distinct and in range by construction
    SecretCode::new(digits).unwrap_or_else(|| unreachable!("generated code has repeats"))
}
