use rand::distr::Distribution as _;

use super::Generator;

/// Number of failed Bernoulli(`p`) trials before the first success.
///
/// With `p == 0.0` no trial ever succeeds and every draw saturates at `u64::MAX`.
#[derive(Clone, Debug)]
pub struct Geometric {
    inner: rand_distr::Geometric,
    p: f64,
}

impl Geometric {
    #[inline]
    pub(crate) fn new(p: f64) -> Result<Self, rand_distr::GeoError> {
        rand_distr::Geometric::new(p).map(|inner| Self { inner, p })
    }

    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Generator for Geometric {
    type Item = f64;

    #[inline]
    fn next<R: rand::Rng>(&mut self, rng: &mut R) -> Self::Item {
        let failures: u64 = self.inner.sample(rng);
        failures as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generator::test::mean;

    #[test]
    fn certain_success_has_no_failures() {
        let mut geometric = Geometric::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_eq!(geometric.next(&mut rng), 0.0);
        }
    }

    #[test]
    fn mean_tracks_failure_ratio() {
        let mut rng = StdRng::seed_from_u64(42);
        for p in [0.58, 0.83, 0.35] {
            let mut geometric = Geometric::new(p).unwrap();
            let expected = (1.0 - p) / p;
            assert_abs_diff_eq!(mean(&mut geometric, &mut rng, 100_000), expected, epsilon = 0.05);
        }
    }
}
