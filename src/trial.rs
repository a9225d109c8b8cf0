use std::sync::LazyLock;

use crate::Kind;
use crate::Parameters;
use crate::Trial;

fn scalar(kind: Kind, param: f64) -> Trial {
    Trial::builder()
        .kind(kind)
        .parameters(Parameters::Scalar(param))
        .build()
}

fn finite(values: &[f64], probabilities: &[f64]) -> Trial {
    Trial::builder()
        .kind(Kind::Finite)
        .parameters(Parameters::Finite {
            values: values.to_vec(),
            probabilities: probabilities.to_vec(),
        })
        .build()
}

pub static POISSON: LazyLock<Vec<Trial>> = LazyLock::new(|| {
    [1.0, 3.58, 5.0, 8.0]
        .into_iter()
        .map(|lambda| scalar(Kind::Poisson, lambda))
        .collect()
});

pub static BERNOULLI: LazyLock<Vec<Trial>> = LazyLock::new(|| {
    [0.0, 1.0, 0.58, 0.83]
        .into_iter()
        .map(|p| scalar(Kind::Bernoulli, p))
        .collect()
});

pub static GEOMETRIC: LazyLock<Vec<Trial>> = LazyLock::new(|| {
    [1.0, 0.58, 0.83, 0.35]
        .into_iter()
        .map(|p| scalar(Kind::Geometric, p))
        .collect()
});

/// The second and third sets are malformed and must be rejected.
pub static FINITE: LazyLock<Vec<Trial>> = LazyLock::new(|| {
    vec![
        finite(&[1.0, 2.0, 3.0], &[0.3, 0.3, 0.4]),
        finite(&[1.0, 2.0], &[0.3, 0.3, 0.4]),
        finite(&[], &[]),
        finite(
            &[1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 4.0, -4.0, 5.0, -5.0],
            &[0.1; 10],
        ),
    ]
});

pub fn all() -> impl Iterator<Item = &'static Trial> {
    [&POISSON, &BERNOULLI, &GEOMETRIC, &FINITE]
        .into_iter()
        .flat_map(|trials| trials.iter())
}
