//! Random sampling for Monte-Carlo integration.
//!
//! A thread-local ChaCha20 generator backs every sampler, so a render on one
//! thread consumes a single deterministic stream of draws. [`reseed`] pins
//! the stream, which makes renders reproducible byte for byte.

use std::cell::RefCell;

use glam::DVec3;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

thread_local! {
    /// Thread-local ChaCha20 PRNG.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Reseed the thread-local generator.
///
/// Two renders of the same scene and configuration after identical reseeds
/// produce identical images.
pub fn reseed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Random f64 in [0.0, 1.0).
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Random f64 in [min, max).
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

/// Random vector with three independent uniform components in [min, max).
///
/// Components are drawn in x, y, z order; the draw order is part of the
/// deterministic sampling stream.
pub fn random_vector(min: f64, max: f64) -> DVec3 {
    DVec3::new(
        random_f64_range(min, max),
        random_f64_range(min, max),
        random_f64_range(min, max),
    )
}

/// Smallest candidate length accepted by [`random_unit_vector`]. Rejecting
/// tiny candidates avoids dividing by a length that underflowed to zero.
const MIN_SAMPLE_LENGTH: f64 = 1e-100;

/// Random unit vector, uniformly distributed over the sphere.
///
/// Rejection-samples the cube [-1, 1]^3 until the candidate falls inside the
/// unit ball, then normalizes it. Accepting candidates outside the ball
/// would bias the distribution toward the cube corners.
pub fn random_unit_vector() -> DVec3 {
    loop {
        let p = random_vector(-1.0, 1.0);
        let length = p.length();
        if MIN_SAMPLE_LENGTH < length && length <= 1.0 {
            return p / length;
        }
    }
}
