//! Sequence manipulation utilities for evolutionary search.
//!
//! Provides random generation, crossover, and mutation operations.

use rand::prelude::*;
use rand_distr::Uniform;

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::individual::Individual;
use crate::schema::{PRINTABLE_MAX, PRINTABLE_MIN};

/// Random number generator wrapper for sequence operations.
///
/// Every random draw of a search goes through one instance of this type.
/// The generic parameter lets tests substitute a scripted generator.
pub struct SequenceRng<R = StdRng> {
    rng: R,
    printable: Uniform<u8>,
}

impl SequenceRng<StdRng> {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SequenceRng<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            printable: Uniform::new_inclusive(PRINTABLE_MIN, PRINTABLE_MAX),
        }
    }

    /// Uniform printable byte in [32, 126].
    #[inline]
    pub fn random_byte(&mut self) -> u8 {
        self.printable.sample(&mut self.rng)
    }

    /// Random printable sequence of the given length.
    pub fn random_sequence(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.random_byte()).collect()
    }

    /// Generate a random individual sized to the target and score it.
    pub fn random_individual(
        &mut self,
        evaluator: &FitnessEvaluator,
    ) -> Result<Individual, EvolutionError> {
        let mut individual = Individual::new(self.random_sequence(evaluator.target_len()));
        evaluator.evaluate(&mut individual)?;
        Ok(individual)
    }

    /// Mutate an individual in place.
    ///
    /// Each position is independently replaced with a fresh printable byte
    /// with probability `rate`. Fitness is left stale.
    pub fn mutate(&mut self, individual: &mut Individual, rate: f64) {
        for i in 0..individual.len() {
            if self.chance(rate) {
                individual.sequence_mut()[i] = self.random_byte();
            }
        }
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns true with the given probability.
    #[inline]
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.r#gen::<f64>() < probability
    }
}

/// Alternating crossover: even positions from `parent1`, odd from `parent2`.
///
/// The child is unevaluated (fitness 0).
pub fn crossover(parent1: &Individual, parent2: &Individual) -> Individual {
    debug_assert_eq!(parent1.len(), parent2.len());

    let sequence = parent1
        .sequence()
        .iter()
        .zip(parent2.sequence())
        .enumerate()
        .map(|(i, (&a, &b))| if i % 2 == 0 { a } else { b })
        .collect();

    Individual::new(sequence)
}

/// Number of positions at which two sequences differ.
///
/// Extra trailing bytes of the longer sequence count as differences.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
    differing + a.len().abs_diff(b.len())
}
