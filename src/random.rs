//! Random attribute sets and functional dependencies.
//!
//! Used by the sampling harness to draw schemas for statistical
//! experiments. The shape of a drawn set is controlled by a closed
//! [`Distribution`] strategy, resolved once at generator construction
//! rather than inspected per call:
//!
//! - [`Distribution::Uniform`] draws every bit pattern with equal
//!   probability.
//! - [`Distribution::Realistic`] first draws the number of set attributes
//!   with binomial weights, then scatters that many ones uniformly.
//! - [`Distribution::Custom`] delegates to a caller-supplied function.
//!
//! Generators own their RNG; [`FdGenerator::seeded`] makes a run fully
//! reproducible.

use num_bigint::{BigUint, ToBigUint};
use rand::distributions::Distribution as _;
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::attrs::AttrSet;
use crate::fd::Fd;

/// Strategy for drawing one attribute set of a given width.
#[derive(Debug, Copy, Clone)]
pub enum Distribution {
    /// Every bit pattern is equally likely.
    Uniform,
    /// The popcount is drawn with binomial weights, the positions uniformly.
    Realistic,
    /// The function receives the RNG and the width and returns raw bits;
    /// bits above the width are masked off.
    Custom(fn(&mut StdRng, u32) -> u64),
}

/// The distribution with its per-width tables resolved.
enum Sampler {
    Uniform,
    Realistic(WeightedIndex<f64>),
    Custom(fn(&mut StdRng, u32) -> u64),
}

fn binomial(n: u32, k: u32) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Generator for random functional dependencies over a fixed universe.
pub struct FdGenerator {
    width: u32,
    sampler: Sampler,
    rng: StdRng,
}

impl FdGenerator {
    /// Creates a uniform generator seeded from system entropy.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn new(width: u32) -> Self {
        Self::with_distribution(width, Distribution::Uniform, StdRng::from_entropy())
    }

    /// Creates a uniform generator with a fixed seed, so every draw sequence
    /// is reproducible.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn seeded(width: u32, seed: u64) -> Self {
        Self::with_distribution(width, Distribution::Uniform, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator with an explicit distribution strategy and RNG.
    /// The strategy is resolved here, once.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn with_distribution(width: u32, distribution: Distribution, rng: StdRng) -> Self {
        // Also validates the width.
        let _ = AttrSet::empty(width);
        let sampler = match distribution {
            Distribution::Uniform => Sampler::Uniform,
            Distribution::Realistic => {
                let weights: Vec<f64> = (0..=width).map(|k| binomial(width, k)).collect();
                Sampler::Realistic(WeightedIndex::new(&weights).unwrap())
            }
            Distribution::Custom(f) => Sampler::Custom(f),
        };
        FdGenerator { width, sampler, rng }
    }

    /// Returns the width of the universe this generator draws over.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Draws one attribute set.
    pub fn attr_set(&mut self) -> AttrSet {
        let width = self.width;
        match &self.sampler {
            Sampler::Uniform => AttrSet::from_bits(width, self.rng.gen()),
            Sampler::Realistic(popcounts) => {
                let ones = popcounts.sample(&mut self.rng);
                let picked = rand::seq::index::sample(&mut self.rng, width as usize, ones);
                AttrSet::from_indices(width, picked.iter().map(|i| i as u32))
            }
            Sampler::Custom(f) => AttrSet::from_bits(width, f(&mut self.rng, width)),
        }
    }

    /// Draws one functional dependency.
    pub fn fd(&mut self) -> Fd {
        let lhs = self.attr_set();
        let rhs = self.attr_set();
        Fd::new(lhs, rhs)
    }

    /// Draws `m` pairwise distinct functional dependencies, in draw order.
    ///
    /// # Panics
    ///
    /// Panics if `m` exceeds the number of distinct dependencies over the
    /// universe (`4^width`), which would otherwise loop forever.
    pub fn fds(&mut self, m: usize) -> Vec<Fd> {
        let space = 2.to_biguint().unwrap().pow(2 * self.width);
        assert!(
            BigUint::from(m as u64) <= space,
            "Cannot draw {} distinct dependencies over a universe of width {}",
            m,
            self.width
        );

        let mut out: Vec<Fd> = Vec::with_capacity(m);
        while out.len() < m {
            let fd = self.fd();
            if !out.contains(&fd) {
                out.push(fd);
            }
        }
        out
    }
}
