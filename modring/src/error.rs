use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RingError {
    /// Modulus too small for any ring arithmetic to be defined
    #[error("modulus must be greater than 1, got {0}")]
    InvalidModulus(BigUint),
    /// Polynomial with no coefficients
    #[error("polynomial has an empty coefficient vector")]
    EmptyPolynomial,
    /// Unparseable modulus literal
    #[error("invalid base-{radix} integer literal")]
    Parse { radix: u32 },
}
