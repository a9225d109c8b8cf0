use rand::distr::Distribution as _;

use super::Generator;

/// Event count with mean `lambda`.
#[derive(Clone, Debug)]
pub struct Poisson {
    inner: rand_distr::Poisson<f64>,
    lambda: f64,
}

impl Poisson {
    #[inline]
    pub(crate) fn new(lambda: f64) -> Result<Self, rand_distr::PoissonError> {
        rand_distr::Poisson::new(lambda).map(|inner| Self { inner, lambda })
    }

    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Generator for Poisson {
    type Item = f64;

    #[inline]
    fn next<R: rand::Rng>(&mut self, rng: &mut R) -> Self::Item {
        self.inner.sample(rng)
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
    fn rejects_non_positive_rate() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(f64::NAN).is_err());
        assert!(Poisson::new(f64::INFINITY).is_err());
    }

    #[test]
    fn draws_are_counts() {
        let mut poisson = Poisson::new(3.58).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let x = poisson.next(&mut rng);
            assert!(x >= 0.0);
            assert_eq!(x, x.trunc());
        }
    }

    #[test]
    fn mean_tracks_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        for lambda in [1.0, 3.58, 5.0, 8.0] {
            let mut poisson = Poisson::new(lambda).unwrap();
            let computed = mean(&mut poisson, &mut rng, 100_000);
            // 5 standard errors of the sample mean
            let tolerance = 5.0 * (lambda / 100_000.0).sqrt();
            assert_abs_diff_eq!(computed, lambda, epsilon = tolerance);
        }
    }
}
