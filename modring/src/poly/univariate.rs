//! Univariate polynomial represented in dense coefficient form.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{arith::Modulus, error::RingError};

/// Stores a univariate polynomial `c[0] + c[1]*x + ... + c[n-1]*x^(n-1)`
/// by its coefficient vector, constant term first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnivariatePolynomial {
    coefficients: Vec<BigUint>,
}

impl UnivariatePolynomial {
    /// Construct a polynomial from its coefficient vector.
    ///
    /// The vector must be non-empty: an empty polynomial has no leading
    /// term to seed Horner's accumulator, so evaluation is rejected here
    /// rather than defined as zero by convention.
    pub fn new(coefficients: Vec<BigUint>) -> Result<Self, RingError> {
        if coefficients.is_empty() {
            return Err(RingError::EmptyPolynomial);
        }
        Ok(Self { coefficients })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Evaluate at `x` using Horner's scheme: starting from the
    /// highest-degree coefficient, `acc = (acc * x + c_i) mod m`.
    ///
    /// The result is always in `[0, m)`; `x` of any magnitude is reduced
    /// implicitly by the per-step reductions. Pure and deterministic.
    ///
    /// # Example
    /// ```
    /// use modring::{Modulus, UnivariatePolynomial};
    /// use num_bigint::BigUint;
    ///
    /// let m = Modulus::new(BigUint::from(1000u32)).unwrap();
    /// // 3 + 10x + 25x^2 at x = 5
    /// let poly = UnivariatePolynomial::new(
    ///     [3u32, 10, 25].map(BigUint::from).to_vec(),
    /// ).unwrap();
    /// assert_eq!(poly.evaluate(&BigUint::from(5u32), &m), BigUint::from(678u32));
    /// ```
    pub fn evaluate(&self, x: &BigUint, modulus: &Modulus) -> BigUint {
        tracing::trace!(degree = self.degree(), "horner evaluation");
        let mut acc = BigUint::zero();
        for c in self.coefficients.iter().rev() {
            acc = modulus.reduce(&(&acc * x + c));
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigUint, RandBigInt};
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::{error::RingError, Modulus, UnivariatePolynomial};

    /// utility: evaluate by explicit powers, `sum c[i] * x^i mod m`
    fn evaluate_direct(coefficients: &[BigUint], x: &BigUint, m: &Modulus) -> BigUint {
        let modulus = m.as_biguint();
        let mut sum = BigUint::zero();
        for (i, c) in coefficients.iter().enumerate() {
            let power = x.modpow(&BigUint::from(i), modulus);
            sum = m.add(&sum, &m.mul(c, &power));
        }
        sum
    }

    #[test]
    fn empty_coefficient_vector_is_rejected() {
        assert!(matches!(
            UnivariatePolynomial::new(vec![]),
            Err(RingError::EmptyPolynomial)
        ));
    }

    #[test]
    fn degree_zero_ignores_the_point() {
        let m = Modulus::new(BigUint::from(13u32)).unwrap();
        let poly = UnivariatePolynomial::new(vec![BigUint::from(40u32)]).unwrap();
        for x in [0u32, 1, 5, 13, 1000] {
            assert_eq!(poly.evaluate(&BigUint::from(x), &m), BigUint::one());
        }
    }

    #[test]
    fn horner_matches_direct_summation_exhaustively() {
        // brute force over small rings and degrees
        for m in 2u32..=8 {
            let modulus = Modulus::new(BigUint::from(m)).unwrap();
            for c0 in 0..m {
                for c1 in 0..m {
                    for c2 in 0..m {
                        let poly = UnivariatePolynomial::new(
                            [c0, c1, c2].map(BigUint::from).to_vec(),
                        )
                        .unwrap();
                        for x in 0..2 * m {
                            let x = BigUint::from(x);
                            assert_eq!(
                                poly.evaluate(&x, &modulus),
                                evaluate_direct(poly.coefficients(), &x, &modulus),
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn horner_matches_direct_summation_randomized() {
        let modulus: Modulus = "340282366920938463463374607431768211297".parse().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for degree in [0usize, 1, 2, 15, 64] {
            let coefficients: Vec<BigUint> =
                (0..=degree).map(|_| modulus.sample(&mut rng)).collect();
            let poly = UnivariatePolynomial::new(coefficients).unwrap();
            let x = modulus.sample(&mut rng);
            assert_eq!(
                poly.evaluate(&x, &modulus),
                evaluate_direct(poly.coefficients(), &x, &modulus),
            );
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let m = Modulus::new(BigUint::from(101u32)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let poly =
            UnivariatePolynomial::new((0..10).map(|_| m.sample(&mut rng)).collect()).unwrap();
        let x = BigUint::from(33u32);
        assert_eq!(poly.evaluate(&x, &m), poly.evaluate(&x, &m));
    }

    #[test]
    fn point_is_reduced_implicitly() {
        let m = Modulus::new(BigUint::from(97u32)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let poly =
            UnivariatePolynomial::new((0..5).map(|_| m.sample(&mut rng)).collect()).unwrap();
        let x = BigUint::from(12u32);
        let shifted = &x + m.as_biguint() * BigUint::from(5u32);
        assert_eq!(poly.evaluate(&x, &m), poly.evaluate(&shifted, &m));
    }

    #[test]
    fn no_truncation_near_the_modulus() {
        let modulus: Modulus = "340282366920938463463374607431768211297".parse().unwrap();
        let top = modulus.as_biguint() - BigUint::one();
        let coefficients = vec![top.clone(); 50];
        let poly = UnivariatePolynomial::new(coefficients).unwrap();
        let result = poly.evaluate(&top, &modulus);
        assert!(result < *modulus.as_biguint());
        assert_eq!(
            result,
            evaluate_direct(poly.coefficients(), &top, &modulus),
        );
    }

    #[test]
    fn unreduced_coefficients_still_land_in_range() {
        let m = Modulus::new(BigUint::from(10u32)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let coefficients: Vec<BigUint> =
            (0..6).map(|_| rng.gen_biguint(64)).collect();
        let poly = UnivariatePolynomial::new(coefficients).unwrap();
        let result = poly.evaluate(&BigUint::from(123u32), &m);
        assert!(result < *m.as_biguint());
    }
}
