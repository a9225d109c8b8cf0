use rand::distr::Distribution as _;

use super::Generator;

/// Yields `1.0` with probability `p`, else `0.0`.
#[derive(Clone, Debug)]
pub struct Bernoulli {
    inner: rand::distr::Bernoulli,
    p: f64,
}

impl Bernoulli {
    #[inline]
    pub(crate) fn new(p: f64) -> Result<Self, rand::distr::BernoulliError> {
        rand::distr::Bernoulli::new(p).map(|inner| Self { inner, p })
    }

    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Generator for Bernoulli {
    type Item = f64;

    #[inline]
    fn next<R: rand::Rng>(&mut self, rng: &mut R) -> Self::Item {
        let success: bool = self.inner.sample(rng);
        match success {
            false => 0.0,
            true => 1.0,
        }
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
    fn degenerate_probabilities() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut never = Bernoulli::new(0.0).unwrap();
        let mut always = Bernoulli::new(1.0).unwrap();
        for _ in 0..1_000 {
            assert_eq!(never.next(&mut rng), 0.0);
            assert_eq!(always.next(&mut rng), 1.0);
        }
    }

    #[test]
    fn mean_tracks_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        for p in [0.58, 0.83, 0.5, 0.01] {
            let mut bernoulli = Bernoulli::new(p).unwrap();
            assert_abs_diff_eq!(mean(&mut bernoulli, &mut rng, 100_000), p, epsilon = 0.01);
        }
    }
}
