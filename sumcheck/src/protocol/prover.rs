//! Prover

use modring::{Modulus, UnivariatePolynomial};
use num_bigint::BigUint;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{error::Error, protocol::IPForUniSumcheck};

/// Prover Message: what gets sent to the verifier once the round completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimedSum {
    /// challenge point the polynomial was evaluated at
    pub challenge: BigUint,
    /// the claimed sum, in `[0, modulus)`
    pub sum: BigUint,
}

impl IPForUniSumcheck {
    /// Run a full prover round: sample a challenge from `rng`, encode the
    /// inputs as a polynomial and evaluate it at the challenge.
    ///
    /// The entropy source is injected so callers control correlation across
    /// invocations; a coarse time-seeded generator here would hand rapid
    /// sequential provers identical challenges. Use an OS or CSPRNG source
    /// in production and a seeded generator in tests.
    ///
    /// Note on semantics: each input is scaled into its own coefficient
    /// slot, `coefficients[i] = inputs[i] * x^(n-1-i)`, so the claim
    /// algebraically collapses to `(sum of inputs) * x^(n-1) mod m`. The
    /// challenge-dependent scaling means this is a consistency check on one
    /// evaluation, not the multi-round Sum-Check reduction of a claimed sum.
    pub fn prove<R: Rng>(
        inputs: &[BigUint],
        modulus: &Modulus,
        rng: &mut R,
    ) -> Result<ClaimedSum, Error> {
        if inputs.is_empty() {
            return Err(Error::EmptyInputs);
        }
        let challenge = modulus.sample(rng);
        tracing::debug!(n = inputs.len(), bits = modulus.bits(), "sampled challenge");
        Self::prove_round(inputs, modulus, challenge)
    }

    /// Deterministic body of the round, with the challenge fixed by the
    /// caller. This is what a verifier replays to check a received claim.
    pub fn prove_round(
        inputs: &[BigUint],
        modulus: &Modulus,
        challenge: BigUint,
    ) -> Result<ClaimedSum, Error> {
        if inputs.is_empty() {
            return Err(Error::EmptyInputs);
        }
        let coefficients = Self::build_coefficients(inputs, &challenge, modulus);
        let poly = UnivariatePolynomial::new(coefficients)?;
        let sum = poly.evaluate(&challenge, modulus);
        tracing::debug!(%sum, "round complete");
        Ok(ClaimedSum { challenge, sum })
    }

    /// Coefficient `i` carries `inputs[i] * x^(n-1-i) mod m`, built by
    /// repeated multiply-and-reduce rather than an explicit power. Slots are
    /// assigned, not accumulated: one input per coefficient.
    pub(crate) fn build_coefficients(
        inputs: &[BigUint],
        x: &BigUint,
        modulus: &Modulus,
    ) -> Vec<BigUint> {
        let n = inputs.len();
        let scale = |(i, input): (usize, &BigUint)| {
            let mut term = modulus.reduce(input);
            for _ in i..n - 1 {
                term = modulus.mul(&term, x);
            }
            term
        };

        #[cfg(feature = "parallel")]
        {
            inputs.par_iter().enumerate().map(scale).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().enumerate().map(scale).collect()
        }
    }
}
