//! Modular arbitrary-precision arithmetic over a caller-supplied modulus.
//!
//! The modulus is a runtime value rather than a compile-time prime, so all
//! arithmetic goes through a validated [`Modulus`] handle that keeps every
//! result inside `[0, m)`.

pub mod arith;
pub mod error;
pub mod poly;

pub use arith::Modulus;
pub use error::RingError;
pub use poly::univariate::UnivariatePolynomial;
