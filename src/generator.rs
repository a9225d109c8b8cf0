use rand::Rng;

mod bernoulli;
mod finite;
mod geometric;
mod poisson;

pub use bernoulli::Bernoulli;
pub use finite::Finite;
pub use geometric::Geometric;
pub use poisson::Poisson;

pub trait Generator {
    type Item;
    fn next<R: Rng>(&mut self, rng: &mut R) -> Self::Item;
}

#[cfg(test)]
pub(crate) mod test {
    use rand::RngCore;

    /// Random source that only ever yields zero bits, so every uniform draw is exactly `0.0`.
    pub(crate) struct Zero;

    impl RngCore for Zero {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    pub(crate) fn mean<G, R>(generator: &mut G, rng: &mut R, count: usize) -> f64
    where
        G: super::Generator<Item = f64>,
        R: rand::Rng,
    {
        (0..count).map(|_| generator.next(rng)).sum::<f64>() / count as f64
    }
}
