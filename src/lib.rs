pub mod factory;
pub mod generator;
pub mod trial;

use core::fmt;
use core::str::FromStr;

use bon::Builder;
use generator::Generator as _;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

pub use factory::GeneratorFactory;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    Poisson,
    Bernoulli,
    Geometric,
    Finite,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Poisson, Kind::Bernoulli, Kind::Geometric, Kind::Finite];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Poisson => "poisson",
            Kind::Bernoulli => "bernoulli",
            Kind::Geometric => "geometric",
            Kind::Finite => "finite",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Rejected;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Rejected::UnknownDistribution(name.to_owned()))
    }
}

/// Construction parameters for one distribution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameters {
    /// Rate for Poisson, success probability for Bernoulli and Geometric.
    Scalar(f64),
    Finite {
        values: Vec<f64>,
        probabilities: Vec<f64>,
    },
}

impl Parameters {
    /// Theoretical mean of `kind` under these parameters, if they fit it.
    pub fn mean(&self, kind: Kind) -> Option<f64> {
        match (kind, self) {
            (Kind::Poisson | Kind::Bernoulli, Parameters::Scalar(param)) => Some(*param),
            (Kind::Geometric, Parameters::Scalar(p)) => Some((1.0 - p) / p),
            (
                Kind::Finite,
                Parameters::Finite {
                    values,
                    probabilities,
                },
            ) => Some(
                values
                    .iter()
                    .zip(probabilities)
                    .map(|(value, probability)| value * probability)
                    .sum(),
            ),
            _ => None,
        }
    }
}

/// Reason the factory refused to build a generator.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Rejected {
    #[error("unknown distribution `{0}`")]
    UnknownDistribution(String),
    #[error("distribution `{0}` does not take these parameters")]
    ParameterShape(Kind),
    #[error("parameter {param} is out of range for `{kind}`")]
    OutOfRange { kind: Kind, param: f64 },
    #[error("finite distribution has no outcomes")]
    Empty,
    #[error("{values} outcome values but {probabilities} probabilities")]
    LengthMismatch { values: usize, probabilities: usize },
    #[error("probability {probability} at index {index} is outside [0, 1]")]
    Probability { index: usize, probability: f64 },
    #[error("probabilities sum to {sum}, not 1")]
    Unnormalized { sum: f64 },
}

#[derive(Clone, Debug)]
pub enum Distribution {
    Poisson(generator::Poisson),
    Bernoulli(generator::Bernoulli),
    Geometric(generator::Geometric),
    Finite(generator::Finite),
}

impl Distribution {
    pub fn kind(&self) -> Kind {
        match self {
            Distribution::Poisson(_) => Kind::Poisson,
            Distribution::Bernoulli(_) => Kind::Bernoulli,
            Distribution::Geometric(_) => Kind::Geometric,
            Distribution::Finite(_) => Kind::Finite,
        }
    }
}

impl generator::Generator for Distribution {
    type Item = f64;

    #[inline]
    fn next<R: rand::Rng>(&mut self, rng: &mut R) -> Self::Item {
        match self {
            Distribution::Poisson(poisson) => poisson.next(rng),
            Distribution::Bernoulli(bernoulli) => bernoulli.next(rng),
            Distribution::Geometric(geometric) => geometric.next(rng),
            Distribution::Finite(finite) => finite.next(rng),
        }
    }
}

/// A distribution bundled with its own pseudo-random stream.
///
/// Built by [`GeneratorFactory`]. Every call to [`Variate::generate`] advances the
/// private stream, which nothing else can observe or reset.
#[derive(Debug)]
pub struct Variate {
    distribution: Distribution,
    rng: StdRng,
}

impl Variate {
    pub(crate) fn new(distribution: Distribution) -> Self {
        Self {
            distribution,
            rng: StdRng::from_os_rng(),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.distribution.kind()
    }

    #[inline]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Draw the next sample.
    #[inline]
    pub fn generate(&mut self) -> f64 {
        self.distribution.next(&mut self.rng)
    }
}

/// One Monte Carlo run: sample a distribution `sample_count` times and average.
#[derive(Builder, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[builder(derive(Clone, Debug))]
pub struct Trial {
    pub kind: Kind,

    pub parameters: Parameters,

    #[builder(default = default::sample_count())]
    #[cfg_attr(
        feature = "serde",
        serde(alias = "samplecount", default = "default::sample_count")
    )]
    pub sample_count: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outcome {
    pub expected: f64,
    pub computed: f64,
}

impl Trial {
    pub fn expected_mean(&self) -> Option<f64> {
        self.parameters.mean(self.kind)
    }

    /// Nominal parameter for reporting: the scalar, or the theoretical mean of a finite set.
    pub fn nominal(&self) -> Option<f64> {
        match &self.parameters {
            Parameters::Scalar(param) => Some(*param),
            Parameters::Finite { .. } => self.expected_mean(),
        }
    }

    pub fn run(&self, factory: &GeneratorFactory) -> Result<Outcome, Rejected> {
        let mut variate = factory.create(self.kind, &self.parameters)?;
        let expected = self
            .expected_mean()
            .ok_or(Rejected::ParameterShape(self.kind))?;
        Ok(Outcome {
            expected,
            computed: mean(&mut variate, self.sample_count),
        })
    }
}

/// Arithmetic mean of the next `count` samples.
pub fn mean(variate: &mut Variate, count: usize) -> f64 {
    (0..count).map(|_| variate.generate()).sum::<f64>() / count as f64
}

#[rustfmt::skip]
mod default {
    pub(super) fn sample_count() -> usize { 100_000 }
}
