//! Verifier

use modring::Modulus;
use num_bigint::BigUint;

use crate::{
    error::Error,
    protocol::{prover::ClaimedSum, IPForUniSumcheck},
};

impl IPForUniSumcheck {
    /// Single-round consistency check: replay the round at the prover's
    /// recorded challenge and compare against the claimed sum.
    ///
    /// Accepts exactly the claims an honest prover produces for `inputs`;
    /// any tampering with the sum is rejected. Input-validation errors
    /// surface the same way they do on the prover side.
    pub fn check_claim(
        inputs: &[BigUint],
        modulus: &Modulus,
        claimed: &ClaimedSum,
    ) -> Result<(), Error> {
        let expected = Self::prove_round(inputs, modulus, claimed.challenge.clone())?;
        if expected.sum != claimed.sum {
            return Err(Error::Reject(Some(format!(
                "expected evaluation {}, got {}",
                expected.sum, claimed.sum
            ))));
        }
        tracing::debug!("claim accepted");
        Ok(())
    }
}
