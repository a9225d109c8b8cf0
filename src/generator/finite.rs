use super::Generator;

/// Explicit outcome set with one probability per outcome.
///
/// Sampling maps a uniform draw `u` in `[0, 1)` to the outcome whose cumulative
/// interval `(cumulative[i - 1], cumulative[i]]` contains it. Draws that land in no
/// interval (exactly `0.0`, or past the last cumulative entry) yield the last outcome.
#[derive(Clone, Debug)]
pub struct Finite {
    cumulative: Vec<f64>,
    values: Vec<f64>,
}

impl Finite {
    /// Caller guarantees `values` is non-empty and as long as `probabilities`.
    #[inline]
    pub(crate) fn new(values: Vec<f64>, probabilities: &[f64]) -> Self {
        let cumulative = probabilities
            .iter()
            .scan(0.0, |sum, probability| {
                *sum += probability;
                Some(*sum)
            })
            .collect();
        Self { cumulative, values }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    fn fallback(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

impl Generator for Finite {
    type Item = f64;

    #[inline]
    fn next<R: rand::Rng>(&mut self, rng: &mut R) -> Self::Item {
        let u = rng.random::<f64>();

        // Zero sits on the open lower bound of the first interval
        if u <= 0.0 {
            return self.fallback();
        }

        let index = self.cumulative.partition_point(|bound| *bound < u);
        match self.values.get(index) {
            Some(value) => *value,
            None => self.fallback(),
        }
    }
}
