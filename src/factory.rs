use tracing::debug;
use tracing::trace;

use crate::Distribution;
use crate::Kind;
use crate::Parameters;
use crate::Rejected;
use crate::Variate;
use crate::generator;

/// Largest distance from one allowed for the sum of finite probabilities.
pub const TOLERANCE: f64 = 1e-9;

/// Single validated entry point for building generators.
///
/// Concrete generators trust their arguments, so every range check lives here.
#[derive(Copy, Clone, Debug, Default)]
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Build a scalar-parameter generator by name: `poisson`, `bernoulli` or `geometric`.
    pub fn create_generator(&self, name: &str, param: f64) -> Result<Variate, Rejected> {
        let kind = name.parse::<Kind>().inspect_err(|error| debug!(%error))?;
        self.create(kind, &Parameters::Scalar(param))
    }

    /// Build a `finite` generator over `values`, drawing `values[i]` with `probabilities[i]`.
    pub fn create_finite_generator(
        &self,
        name: &str,
        values: &[f64],
        probabilities: &[f64],
    ) -> Result<Variate, Rejected> {
        let kind = name.parse::<Kind>().inspect_err(|error| debug!(%error))?;
        self.create(
            kind,
            &Parameters::Finite {
                values: values.to_vec(),
                probabilities: probabilities.to_vec(),
            },
        )
    }

    pub fn create(&self, kind: Kind, parameters: &Parameters) -> Result<Variate, Rejected> {
        let distribution = Self::distribution(kind, parameters).inspect_err(|error| {
            debug!(%kind, ?parameters, %error, "rejected generator");
        })?;
        trace!(%kind, ?parameters, "created generator");
        Ok(Variate::new(distribution))
    }

    fn distribution(kind: Kind, parameters: &Parameters) -> Result<Distribution, Rejected> {
        let out_of_range = |param: f64| Rejected::OutOfRange { kind, param };

        match (kind, parameters) {
            (Kind::Poisson, Parameters::Scalar(lambda)) => generator::Poisson::new(*lambda)
                .map(Distribution::Poisson)
                .map_err(|_| out_of_range(*lambda)),
            (Kind::Bernoulli, Parameters::Scalar(p)) => {
                if !is_probability(*p) {
                    return Err(out_of_range(*p));
                }
                generator::Bernoulli::new(*p)
                    .map(Distribution::Bernoulli)
                    .map_err(|_| out_of_range(*p))
            }
            (Kind::Geometric, Parameters::Scalar(p)) => {
                if !is_probability(*p) {
                    return Err(out_of_range(*p));
                }
                generator::Geometric::new(*p)
                    .map(Distribution::Geometric)
                    .map_err(|_| out_of_range(*p))
            }
            (
                Kind::Finite,
                Parameters::Finite {
                    values,
                    probabilities,
                },
            ) => {
                check_finite(values, probabilities)?;
                Ok(Distribution::Finite(generator::Finite::new(
                    values.clone(),
                    probabilities,
                )))
            }
            (kind, _) => Err(Rejected::ParameterShape(kind)),
        }
    }
}

#[inline]
fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

fn check_finite(values: &[f64], probabilities: &[f64]) -> Result<(), Rejected> {
    if values.is_empty() {
        return Err(Rejected::Empty);
    }

    if values.len() != probabilities.len() {
        return Err(Rejected::LengthMismatch {
            values: values.len(),
            probabilities: probabilities.len(),
        });
    }

    if let Some((index, probability)) = probabilities
        .iter()
        .copied()
        .enumerate()
        .find(|(_, probability)| !is_probability(*probability))
    {
        return Err(Rejected::Probability { index, probability });
    }

    let sum = probabilities.iter().sum::<f64>();
    match (sum - 1.0).abs() < TOLERANCE {
        false => Err(Rejected::Unnormalized { sum }),
        true => Ok(()),
    }
}
