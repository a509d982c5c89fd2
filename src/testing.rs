use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate a strictly increasing axis of `n` breakpoints from `start` to `stop`,
/// with each interior breakpoint jittered by up to a tenth of the spacing
pub fn jittered_axis(rng: &mut StdRng, start: f64, stop: f64, n: usize) -> Vec<f64> {
    let mut x = crate::utils::linspace(start, stop, n);
    if n > 2 {
        let dx = (stop - start) / (n - 1) as f64;
        let noise = randn::<f64>(rng, n);
        (1..n - 1).for_each(|i| x[i] += (noise[i] - 0.5) * dx / 5.0);
    }
    (0..n.saturating_sub(1)).for_each(|i| assert!(x[i + 1] > x[i]));
    x
}

/// Route library log output through the test harness
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
