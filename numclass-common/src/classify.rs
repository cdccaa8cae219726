//! Number parsing and classification predicates
//!
//! Pure functions with no HTTP or runtime dependencies. The service crate
//! wraps these with request handling and fun fact enrichment.
//!
//! All predicates accept any `i64`, including negative values and the
//! extremes of the range, and run in bounded time regardless of magnitude.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A named property reported in the `properties` list of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberProperty {
    /// Equal to the sum of its digits each raised to the digit count
    Armstrong,
    /// Divisible by 2
    Even,
    /// Not divisible by 2
    Odd,
}

impl NumberProperty {
    /// Wire name of the property
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberProperty::Armstrong => "armstrong",
            NumberProperty::Even => "even",
            NumberProperty::Odd => "odd",
        }
    }
}

impl std::fmt::Display for NumberProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locally computed classification of a single integer
///
/// Everything in the response except the fun fact, which comes from an
/// external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u32,
}

/// Parse a raw query value as a base-10 signed 64-bit integer.
///
/// Surrounding whitespace is ignored and a single leading `+` or `-` is
/// accepted. Fractions, exponents, digit separators and values outside the
/// `i64` range are rejected with [`Error::InvalidInput`] carrying the raw
/// string unchanged.
///
/// # Examples
///
/// ```
/// use numclass_common::parse_number;
///
/// assert_eq!(parse_number("42").unwrap(), 42);
/// assert_eq!(parse_number(" -7 ").unwrap(), -7);
/// assert!(parse_number("3.5").is_err());
/// assert!(parse_number("abc").is_err());
/// ```
pub fn parse_number(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(raw.to_string()))
}

/// Witness set that makes Miller-Rabin exact for every 64-bit input
const PRIME_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Every perfect number in the `i64` range.
///
/// Even perfect numbers are exactly `2^(p-1) * (2^p - 1)` with `2^p - 1`
/// prime (p = 2, 3, 5, 7, 13, 17, 19, 31 here). No odd perfect number exists
/// below 10^1500.
const PERFECT_NUMBERS: [i64; 8] = [
    6,
    28,
    496,
    8128,
    33_550_336,
    8_589_869_056,
    137_438_691_328,
    2_305_843_008_139_952_128,
];

/// True iff `n >= 2` and `n` has no divisor other than 1 and itself.
///
/// Deterministic Miller-Rabin; constant work for any `i64`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    for &p in &PRIME_WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in &PRIME_WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// True iff `n >= 2` and the proper positive divisors of `n` sum to `n`.
pub fn is_perfect(n: i64) -> bool {
    PERFECT_NUMBERS.contains(&n)
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// True iff `n >= 0` and `n` equals the sum of its decimal digits each raised
/// to the number of digits. Negative numbers are never Armstrong numbers.
///
/// # Examples
///
/// ```
/// use numclass_common::classify::is_armstrong;
///
/// assert!(is_armstrong(153));
/// assert!(!is_armstrong(10));
/// assert!(!is_armstrong(-153));
/// ```
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = decimal_digits(n.unsigned_abs());
    let power = digits.len() as u32;

    // 19 * 9^19 fits comfortably in u128
    let sum: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    sum == n as u128
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u32 {
    decimal_digits(n.unsigned_abs())
        .into_iter()
        .map(u32::from)
        .sum()
}

/// [`NumberProperty::Odd`] if `n` is not divisible by 2, otherwise
/// [`NumberProperty::Even`]. Sign does not matter.
pub fn parity(n: i64) -> NumberProperty {
    if n % 2 != 0 {
        NumberProperty::Odd
    } else {
        NumberProperty::Even
    }
}

/// Ordered property list: `armstrong` (when it applies) then the parity.
pub fn properties(n: i64) -> Vec<NumberProperty> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(NumberProperty::Armstrong);
    }
    properties.push(parity(n));
    properties
}

/// Run every predicate against `n`.
pub fn classify(n: i64) -> Classification {
    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties: properties(n),
        digit_sum: digit_sum(n),
    }
}

/// Decimal digits of `n`, most significant first. Zero has one digit.
fn decimal_digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(20);
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}
