use modring::RingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Prover called with no inputs
    #[error("input vector is empty")]
    EmptyInputs,
    /// Ring arithmetic error, propagated unchanged
    #[error(transparent)]
    Ring(#[from] RingError),
    /// Claim failed the verifier's consistency check
    #[error("claim rejected: {0:?}")]
    Reject(Option<String>),
}
