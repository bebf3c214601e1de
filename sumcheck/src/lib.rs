//! Single-round sum-claim protocol over a caller-supplied modulus.
//!
//! A prover holds a private vector of integers and convinces a verifier of a
//! claim about their sum, modulo a large prime, through one polynomial
//! evaluation at a random challenge point: the inputs are scaled into the
//! coefficients of a univariate polynomial, the polynomial is evaluated at
//! the challenge, and the verifier replays that evaluation to check
//! consistency. The round is structurally a one-variable slice of the
//! classical multi-round Sum-Check protocol and carries none of its
//! soundness; see [`IPForUniSumcheck::prove`] for the exact claim shape.
//!
//! All arithmetic is exact modular arithmetic over arbitrary-precision
//! integers; every value handed back is reduced into `[0, modulus)`.

pub mod error;
pub mod protocol;

pub use error::Error;
pub use protocol::{ClaimedSum, IPForUniSumcheck};

use modring::Modulus;
use num_bigint::BigUint;
use rand::Rng;

/// Front over [`IPForUniSumcheck`] for callers that just want a claim in
/// and a verdict out.
///
/// # Example
/// ```
/// use modring::Modulus;
/// use num_bigint::BigUint;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use sumcheck::UniSumcheck;
///
/// let modulus: Modulus = "97".parse().unwrap();
/// let inputs: Vec<BigUint> = vec![1u32.into(), 2u32.into(), 3u32.into()];
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
///
/// let claim = UniSumcheck::compute_claim(&inputs, &modulus, &mut rng).unwrap();
/// assert!(claim.sum < *modulus.as_biguint());
/// UniSumcheck::verify_claim(&inputs, &modulus, &claim).unwrap();
/// ```
pub struct UniSumcheck;

impl UniSumcheck {
    /// Compute the prover's claim for `inputs`, drawing the challenge from
    /// `rng`.
    pub fn compute_claim<R: Rng>(
        inputs: &[BigUint],
        modulus: &Modulus,
        rng: &mut R,
    ) -> Result<ClaimedSum, Error> {
        IPForUniSumcheck::prove(inputs, modulus, rng)
    }

    /// Check a received claim against the inputs it was allegedly computed
    /// from.
    pub fn verify_claim(
        inputs: &[BigUint],
        modulus: &Modulus,
        claimed: &ClaimedSum,
    ) -> Result<(), Error> {
        IPForUniSumcheck::check_claim(inputs, modulus, claimed)
    }
}
