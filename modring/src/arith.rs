//! The ring `Z/mZ` for a runtime modulus `m`.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::error::RingError;

/// A validated modulus. Construction rejects `m <= 1`, so every method can
/// assume the ring is non-degenerate and return values in `[0, m)`.
///
/// Immutable for the duration of a protocol run; cheap to pass by reference.
///
/// # Example
/// ```
/// use modring::Modulus;
/// use num_bigint::BigUint;
///
/// let m: Modulus = "97".parse().unwrap();
/// assert_eq!(m.reduce(&BigUint::from(100u32)), BigUint::from(3u32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus(BigUint);

impl Modulus {
    pub fn new(value: BigUint) -> Result<Self, RingError> {
        if value <= BigUint::one() {
            return Err(RingError::InvalidModulus(value));
        }
        Ok(Modulus(value))
    }

    /// Parse a modulus from a string in the given radix (2..=36).
    pub fn from_radix_str(s: &str, radix: u32) -> Result<Self, RingError> {
        let value =
            BigUint::parse_bytes(s.as_bytes(), radix).ok_or(RingError::Parse { radix })?;
        Self::new(value)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Number of bits of the modulus.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Reduce `value` into `[0, m)`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.0
    }

    /// `(a + b) mod m`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.0
    }

    /// `(a * b) mod m`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.0
    }

    /// Draw a uniform element of `[0, m)` from `rng`.
    ///
    /// Each call is an independent draw; correlation between calls is
    /// entirely a property of the caller's generator.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.0)
    }
}

impl FromStr for Modulus {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_radix_str(s, 10)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
