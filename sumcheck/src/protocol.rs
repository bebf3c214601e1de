//! Interactive proof protocol for the single-round univariate sum claim.

pub mod prover;
pub mod verifier;

pub use prover::ClaimedSum;

/// Single-round interactive proof reducing a claimed sum of private inputs
/// to one polynomial evaluation at a random challenge point.
pub struct IPForUniSumcheck;
