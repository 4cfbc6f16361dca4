//! Next-generation construction from a mating pool.

use rand::Rng;

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::genome::{SequenceRng, crossover};
use super::pool::MatingPool;
use super::population::Population;

/// Breed `population_size` children from the pool.
///
/// Each child comes from two parents drawn uniformly with replacement,
/// combined by alternating crossover, mutated once, then scored.
pub fn reproduce<R: Rng>(
    pool: &MatingPool,
    population_size: usize,
    evaluator: &FitnessEvaluator,
    mutation_rate: f64,
    rng: &mut SequenceRng<R>,
) -> Result<Population, EvolutionError> {
    if pool.is_empty() {
        return Err(EvolutionError::EmptyPool);
    }

    let mut next_gen = Vec::with_capacity(population_size);

    for _ in 0..population_size {
        let parent1 = pool.pick(rng)?;
        let parent2 = pool.pick(rng)?;

        let mut child = crossover(parent1, parent2);
        rng.mutate(&mut child, mutation_rate);
        evaluator.evaluate(&mut child)?;

        next_gen.push(child);
    }

    Ok(Population::from_individuals(next_gen))
}
