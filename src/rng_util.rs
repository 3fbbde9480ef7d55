/// Create an RNG from an optional seed, falling back to a random seed.
#[inline]
pub(crate) fn rng_from_seed(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}

/// Derive an independent child RNG from `rng`.
///
/// The child is seeded from a single draw of the parent, so a seeded parent
/// yields a reproducible sequence of children.
#[inline]
pub(crate) fn fork(rng: &mut fastrand::Rng) -> fastrand::Rng {
    fastrand::Rng::with_seed(rng.u64(..))
}

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}
