//! Source of uniformly random site coordinates.

use rand::Rng;

/// Uniform integer draws over an inclusive range.
///
/// Every [`rand::Rng`] is a site source, so a seeded
/// `rand_chacha::ChaCha8Rng` can be handed to the runner directly.
pub trait SiteSource {
    /// Draw an integer uniformly from `lo..=hi`.
    fn uniform(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: Rng + ?Sized> SiteSource for R {
    fn uniform(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform(1, 5);
            assert!((1..=5).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(rng.uniform(1, 1), 1);
    }

    #[test]
    fn test_every_value_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.uniform(1, 4) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
