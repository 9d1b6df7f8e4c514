use rand::Rng;
use scalograd_core::Scalar;

// Builds a random expression over `leaves` using only operators that stay
// bounded and smooth on moderate inputs, so finite differences are reliable.
// Structure depends only on `rng`, never on leaf values: the same seed builds
// the same expression for any leaf values.
#[allow(dead_code)]
pub fn random_expression<R: Rng>(rng: &mut R, leaves: &[Scalar], depth: usize) -> Scalar {
    if depth == 0 || rng.gen_bool(0.15) {
        return leaves[rng.gen_range(0..leaves.len())].clone();
    }
    let a = random_expression(rng, leaves, depth - 1);
    match rng.gen_range(0..9) {
        0 => &a + &random_expression(rng, leaves, depth - 1),
        1 => &a - &random_expression(rng, leaves, depth - 1),
        2 => &a * &random_expression(rng, leaves, depth - 1),
        3 => {
            let b = random_expression(rng, leaves, depth - 1);
            &a / (b.pow(2.0) + 1.0)
        }
        4 => -&a,
        5 => a.pow(2.0),
        6 => a.sigmoid(),
        7 => a.tanh(),
        _ => a.relu() + rng.gen_range(-1.0f64..1.0),
    }
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
