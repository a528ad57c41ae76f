//! Batch sampling of random schemas through the normal-form classifier.
//!
//! The harness draws random dependency sets, classifies each one, and
//! aggregates pass counts and timings. It adds no algorithmic machinery of
//! its own: it is a pure consumer of [`classify`] and the generators in
//! [`random`](crate::random).
//!
//! Runs are bounded by a wall-clock budget, not by sample count: the
//! classification of a single unlucky sample is exponential in the worst
//! case, so the loop checks the budget between samples and never interrupts
//! a classification in flight.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fd::Fd;
use crate::nf::{classify, Classification};
use crate::random::FdGenerator;

/// One classified sample.
#[derive(Debug, Clone)]
pub struct SampleOutcome {
    /// Width of the attribute universe the sample was drawn over.
    pub width: u32,
    /// The drawn dependency set.
    pub fds: Vec<Fd>,
    /// Normal-form flags of the sample.
    pub classification: Classification,
    /// Time spent classifying (excludes generation).
    pub elapsed: Duration,
}

/// Aggregated counts over a batch of outcomes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SampleSummary {
    pub samples: usize,
    pub bcnf: usize,
    pub third: usize,
    pub second: usize,
    pub total_time: Duration,
}

impl SampleSummary {
    /// Aggregates a batch of outcomes.
    pub fn of(outcomes: &[SampleOutcome]) -> Self {
        SampleSummary {
            samples: outcomes.len(),
            bcnf: outcomes.iter().filter(|o| o.classification.bcnf).count(),
            third: outcomes.iter().filter(|o| o.classification.third).count(),
            second: outcomes.iter().filter(|o| o.classification.second).count(),
            total_time: outcomes.iter().map(|o| o.elapsed).sum(),
        }
    }
}

/// Runner that samples random dependency sets and classifies them until a
/// wall-clock budget runs out.
pub struct SampleRush {
    width: u32,
    generator: FdGenerator,
    fd_range: RangeInclusive<usize>,
    rng: StdRng,
    outcomes: Vec<SampleOutcome>,
}

impl SampleRush {
    /// Creates a runner with a uniform generator seeded from entropy. The
    /// number of dependencies per sample is drawn uniformly from
    /// `0..=width`.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn new(width: u32) -> Self {
        Self::with_generator(width, FdGenerator::new(width), StdRng::from_entropy())
    }

    /// Creates a fully reproducible runner.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn seeded(width: u32, seed: u64) -> Self {
        Self::with_generator(
            width,
            FdGenerator::seeded(width, seed),
            StdRng::seed_from_u64(seed ^ 0x5eed),
        )
    }

    /// Creates a runner around an explicit generator (e.g. one with a
    /// non-uniform [`Distribution`](crate::random::Distribution)).
    ///
    /// # Panics
    ///
    /// Panics if `width > 64` or the generator draws over a different width.
    pub fn with_generator(width: u32, generator: FdGenerator, rng: StdRng) -> Self {
        assert_eq!(
            generator.width(),
            width,
            "Generator width must match the sampled universe"
        );
        SampleRush {
            width,
            generator,
            fd_range: 0..=width as usize,
            rng,
            outcomes: Vec::new(),
        }
    }

    /// Changes the range the per-sample dependency count is drawn from.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn set_fd_range(&mut self, fd_range: RangeInclusive<usize>) {
        assert!(!fd_range.is_empty(), "Dependency-count range must be non-empty");
        self.fd_range = fd_range;
    }

    /// Draws and classifies one sample, recording and returning its outcome.
    pub fn sample_once(&mut self) -> &SampleOutcome {
        let m = self.rng.gen_range(self.fd_range.clone());
        let fds = self.generator.fds(m);
        debug!("sample {}: {} dependencies over width {}", self.outcomes.len(), m, self.width);

        let started = Instant::now();
        let classification = classify(self.width, &fds);
        let elapsed = started.elapsed();
        debug!("sample {}: {:?} in {:?}", self.outcomes.len(), classification, elapsed);

        self.outcomes.push(SampleOutcome {
            width: self.width,
            fds,
            classification,
            elapsed,
        });
        self.outcomes.last().unwrap()
    }

    /// Samples until `budget` wall-clock time has passed, then returns all
    /// outcomes recorded so far (including those of earlier runs). At least
    /// one sample is taken if the budget is non-zero.
    pub fn run(&mut self, budget: Duration) -> &[SampleOutcome] {
        let started = Instant::now();
        while started.elapsed() < budget {
            self.sample_once();
        }
        &self.outcomes
    }

    /// Returns the outcomes recorded so far.
    pub fn outcomes(&self) -> &[SampleOutcome] {
        &self.outcomes
    }

    /// Aggregates the outcomes recorded so far.
    pub fn summary(&self) -> SampleSummary {
        SampleSummary::of(&self.outcomes)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::nf::{is_2nf, is_3nf, is_bcnf};

    use super::*;

    #[test]
    fn test_sample_once_is_consistent() {
        let mut rush = SampleRush::seeded(4, 99);
        for _ in 0..30 {
            let outcome = rush.sample_once();
            let c = outcome.classification;
            // The recorded flags agree with the standalone predicates.
            assert_eq!(c.bcnf, is_bcnf(4, &outcome.fds));
            assert_eq!(c.third, c.bcnf || is_3nf(4, &outcome.fds));
            assert_eq!(c.second, c.third || is_2nf(4, &outcome.fds));
        }
    }

    #[test]
    fn test_ladder_holds_per_sample() {
        let mut rush = SampleRush::seeded(5, 7);
        for _ in 0..30 {
            let c = rush.sample_once().classification;
            assert!(!c.bcnf || c.third);
            assert!(!c.third || c.second);
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut rush = SampleRush::seeded(4, 123);
        for _ in 0..25 {
            rush.sample_once();
        }
        let summary = rush.summary();
        assert_eq!(summary.samples, 25);
        assert!(summary.bcnf <= summary.third);
        assert!(summary.third <= summary.second);
        assert!(summary.second <= summary.samples);
        let by_hand: Duration = rush.outcomes().iter().map(|o| o.elapsed).sum();
        assert_eq!(summary.total_time, by_hand);
    }

    #[test]
    fn test_run_respects_budget() {
        let mut rush = SampleRush::seeded(3, 5);
        let outcomes = rush.run(Duration::from_millis(20));
        assert!(!outcomes.is_empty());
        // A tiny universe classifies fast; well under the budget per sample.
        assert_eq!(rush.summary().samples, rush.outcomes().len());
    }

    #[test]
    fn test_fd_range() {
        let mut rush = SampleRush::seeded(4, 11);
        rush.set_fd_range(2..=2);
        for _ in 0..10 {
            assert_eq!(rush.sample_once().fds.len(), 2);
        }
    }
}
