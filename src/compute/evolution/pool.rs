//! Fitness-weighted mating pool.

use rand::Rng;

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::genome::SequenceRng;
use super::individual::Individual;
use super::population::Population;

/// Copies per individual when its fitness equals the best fitness.
const MAX_WEIGHT: f64 = 100.0;

/// Weighted resampling of a population, used as the parent source.
#[derive(Debug, Clone, Default)]
pub struct MatingPool {
    members: Vec<Individual>,
    extinction: bool,
}

impl MatingPool {
    /// Build the pool for one generation.
    ///
    /// Every individual is re-scored, then appended
    /// `floor(fitness / max_fitness * 100)` times. With probability
    /// `extinction_rate` the weighted pool is thrown away and replaced by two
    /// individuals drawn uniformly (with replacement) from the population.
    ///
    /// When the whole population scores zero (and `max_fitness` is zero) the
    /// pool holds one copy of each individual instead.
    pub fn build<R: Rng>(
        population: &mut Population,
        evaluator: &FitnessEvaluator,
        max_fitness: f64,
        extinction_rate: f64,
        rng: &mut SequenceRng<R>,
    ) -> Result<Self, EvolutionError> {
        if !max_fitness.is_finite() || max_fitness < 0.0 {
            return Err(EvolutionError::DegenerateFitness(max_fitness));
        }

        for individual in population.individuals_mut() {
            evaluator.evaluate(individual)?;
        }

        let mut members = if max_fitness == 0.0 {
            if population.iter().any(|i| i.fitness() > 0.0) {
                return Err(EvolutionError::DegenerateFitness(max_fitness));
            }
            log::warn!(
                "Whole population scored zero, using uniform pool of {}",
                population.len()
            );
            population.individuals().to_vec()
        } else {
            let mut members = Vec::new();
            for individual in population.iter() {
                let copies = Self::weight(individual.fitness(), max_fitness);
                members.extend(std::iter::repeat_n(individual, copies).cloned());
            }
            members
        };

        let mut extinction = false;
        if rng.chance(extinction_rate) && !population.is_empty() {
            let first = rng.index(population.len());
            let second = rng.index(population.len());
            let individuals = population.individuals();

            log::info!(
                "Extinction event: pool of {} collapsed to 2 survivors",
                members.len()
            );
            members = vec![individuals[first].clone(), individuals[second].clone()];
            extinction = true;
        }

        if members.is_empty() {
            return Err(EvolutionError::EmptyPool);
        }

        Ok(Self {
            members,
            extinction,
        })
    }

    /// Number of copies an individual contributes.
    #[inline]
    pub fn weight(fitness: f64, max_fitness: f64) -> usize {
        ((fitness / max_fitness) * MAX_WEIGHT).floor() as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Whether this pool came from an extinction event.
    pub fn is_extinction(&self) -> bool {
        self.extinction
    }

    /// Pick a uniformly random member. Fails on an empty pool.
    pub fn pick<R: Rng>(&self, rng: &mut SequenceRng<R>) -> Result<&Individual, EvolutionError> {
        if self.members.is_empty() {
            return Err(EvolutionError::EmptyPool);
        }
        Ok(&self.members[rng.index(self.members.len())])
    }
}

impl From<Vec<Individual>> for MatingPool {
    fn from(members: Vec<Individual>) -> Self {
        Self {
            members,
            extinction: false,
        }
    }
}
