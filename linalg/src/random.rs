use crate::{Arithmetic, FixedMatrix, FixedVector};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

impl<const N: usize, T: Arithmetic> FixedVector<N, T> {
    /// Draws every component independently from `dist`.
    pub fn sample<R: Rng + ?Sized, D: Distribution<T>>(rng: &mut R, dist: &D) -> Self {
        Self::from_fn(|_| dist.sample(rng))
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> FixedMatrix<R, C, T> {
    /// Draws every element independently from `dist`, row by row.
    pub fn sample<G: Rng + ?Sized, D: Distribution<T>>(rng: &mut G, dist: &D) -> Self {
        Self::from_fn(|_, _| dist.sample(rng))
    }
}

impl<const N: usize, T: Arithmetic> Distribution<FixedVector<N, T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FixedVector<N, T> {
        FixedVector::sample(rng, self)
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> Distribution<FixedMatrix<R, C, T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> FixedMatrix<R, C, T> {
        FixedMatrix::sample(rng, self)
    }
}
