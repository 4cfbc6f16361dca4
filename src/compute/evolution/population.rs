//! Fixed-size generation of individuals.

use rand::Rng;

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::genome::{SequenceRng, hamming_distance};
use super::individual::Individual;

/// An ordered generation of individuals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create `size` random individuals, each already scored.
    pub fn random<R: Rng>(
        size: usize,
        evaluator: &FitnessEvaluator,
        rng: &mut SequenceRng<R>,
    ) -> Result<Self, EvolutionError> {
        let individuals = (0..size)
            .map(|_| rng.random_individual(evaluator))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { individuals })
    }

    /// Wrap existing individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Highest-fitness individual. Ties go to the earliest one.
    pub fn best(&self) -> Option<&Individual> {
        let mut best: Option<&Individual> = None;
        for individual in &self.individuals {
            if best.is_none_or(|b| individual.fitness() > b.fitness()) {
                best = Some(individual);
            }
        }
        best
    }

    /// Mean fitness, 0 for an empty population.
    pub fn average_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.individuals.iter().map(|i| i.fitness()).sum::<f64>() / self.individuals.len() as f64
    }

    /// Mean Hamming distance from the best individual, normalised to [0, 1].
    pub fn diversity(&self) -> f64 {
        let Some(best) = self.best() else {
            return 0.0;
        };
        if best.is_empty() {
            return 0.0;
        }

        let total: usize = self
            .individuals
            .iter()
            .map(|i| hamming_distance(i.sequence(), best.sequence()))
            .sum();

        total as f64 / (self.individuals.len() * best.len()) as f64
    }
}
