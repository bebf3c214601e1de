use modring::Modulus;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use sumcheck::UniSumcheck;

fn main() {
    // 2^128 - 159
    let modulus: Modulus = "340282366920938463463374607431768211297"
        .parse()
        .expect("modulus");
    let inputs: Vec<BigUint> = (1u32..=3).map(BigUint::from).collect();

    let mut rng = OsRng;
    let claim = UniSumcheck::compute_claim(&inputs, &modulus, &mut rng).expect("sum claim failed");
    UniSumcheck::verify_claim(&inputs, &modulus, &claim).expect("verification failed");

    println!("Sum: {}", claim.sum);
}
