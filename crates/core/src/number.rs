//! Numeric predicates used to classify a single integer.
//!
//! Every function here is a plain trial-division or digit-decomposition
//! routine. Callers are expected to bound the magnitude of the input
//! (see [`crate::classify::MAX_MAGNITUDE`]); the functions themselves are
//! total over `i64` and never overflow.

/// Check whether `n` is prime
///
/// Numbers below 2 (including every negative number) are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Check whether `n` is a perfect number
///
/// A perfect number equals the sum of its proper divisors. Zero, negative
/// numbers and 1 are never perfect.
pub fn is_perfect(n: i64) -> bool {
    if n <= 0 {
        return false;
    }

    let mut sum: i128 = 1;
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i as i128;
            let cofactor = n / i;
            if cofactor != i {
                sum += cofactor as i128;
            }
        }
        i += 1;
    }

    sum == n as i128 && n != 1
}

/// Check whether `n` is an Armstrong (narcissistic) number
///
/// Each decimal digit is raised to the power of the digit count and the
/// results are summed. Negative numbers are never Armstrong numbers.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let digits = decimal_digits(n.unsigned_abs());
    let power = digits.len() as u32;
    let sum: u128 = digits.iter().map(|d| (*d as u128).pow(power)).sum();

    sum == n as u128
}

/// Sum of the decimal digits of `|n|`
///
/// The sign is ignored: `digit_sum(-123) == digit_sum(123) == 6`.
pub fn digit_sum(n: i64) -> u64 {
    decimal_digits(n.unsigned_abs())
        .into_iter()
        .map(u64::from)
        .sum()
}

/// Parity on the signed integer (`-3` is odd, `-4` is even)
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

// Most significant digit first. Zero has the single digit 0.
fn decimal_digits(mut magnitude: u64) -> Vec<u8> {
    if magnitude == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
    }
    digits.reverse();
    digits
}
