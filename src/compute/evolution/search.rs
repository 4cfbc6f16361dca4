//! Generational driver loop.

use std::time::Instant;

use rand::Rng;
use rand::rngs::StdRng;

use crate::schema::{
    GenerationReport, SearchConfig, SearchHistory, SearchResult, SearchStats, StopReason,
};

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::genome::SequenceRng;
use super::pool::MatingPool;
use super::population::Population;
use super::reproduction::reproduce;

/// Evolution engine that runs the search.
///
/// Each generation the best individual is reported; the run converges once
/// it equals the target, otherwise the population is replaced by children
/// bred from a fitness-weighted mating pool.
pub struct EvolutionEngine<R = StdRng> {
    config: SearchConfig,
    rng: SequenceRng<R>,
    evaluator: FitnessEvaluator,
    population: Population,
    history: SearchHistory,
    generation: usize,
    extinction_events: usize,
    total_evaluations: u64,
}

impl EvolutionEngine<StdRng> {
    /// Create a new evolution engine.
    ///
    /// Uses `config.random_seed` when set. Otherwise the seed is drawn from
    /// OS entropy through `rand::random`, so unseeded runs differ.
    pub fn new(config: SearchConfig) -> Result<Self, EvolutionError> {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        log::debug!("Seeding search with {seed}");
        Self::with_rng(config, SequenceRng::new(seed))
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Create an engine around an explicit random source.
    pub fn with_rng(config: SearchConfig, rng: SequenceRng<R>) -> Result<Self, EvolutionError> {
        config.validate()?;
        let evaluator = FitnessEvaluator::new(config.target_bytes());

        Ok(Self {
            config,
            rng,
            evaluator,
            population: Population::default(),
            history: SearchHistory::default(),
            generation: 0,
            extinction_events: 0,
            total_evaluations: 0,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Generations reported so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// History recorded so far. Stays empty unless `record_history` is set.
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Initialize the population.
    pub fn initialize(&mut self) -> Result<(), EvolutionError> {
        self.generation = 0;
        self.extinction_events = 0;
        self.total_evaluations = 0;
        self.history = SearchHistory::default();

        self.population = Population::random(
            self.config.population_size,
            &self.evaluator,
            &mut self.rng,
        )?;
        self.total_evaluations += self.population.len() as u64;

        Ok(())
    }

    /// Start a generation: bump the counter and report the current best.
    fn observe(&mut self) -> Result<GenerationReport, EvolutionError> {
        self.generation += 1;

        let best = self.population.best().ok_or(EvolutionError::EmptyPool)?;
        let converged = self.evaluator.is_match(best.sequence());
        let report = GenerationReport {
            generation: self.generation,
            best: best.to_snapshot(),
            avg_fitness: self.population.average_fitness(),
            converged,
        };

        if self.config.record_history {
            self.history.best_fitness.push(report.best.fitness);
            self.history.avg_fitness.push(report.avg_fitness);
            self.history.diversity.push(self.population.diversity());
        }

        log::debug!(
            "Generation {}: best={:?} fitness={:.3} avg={:.3}",
            report.generation,
            report.best.text,
            report.best.fitness,
            report.avg_fitness
        );

        Ok(report)
    }

    /// Replace the population with the next generation.
    fn breed(&mut self, max_fitness: f64) -> Result<(), EvolutionError> {
        let pool = MatingPool::build(
            &mut self.population,
            &self.evaluator,
            max_fitness,
            self.config.extinction_rate,
            &mut self.rng,
        )?;
        if pool.is_extinction() {
            self.extinction_events += 1;
        }

        let next_gen = reproduce(
            &pool,
            self.config.population_size,
            &self.evaluator,
            self.config.mutation_rate,
            &mut self.rng,
        )?;

        // Re-score of the old generation plus scoring of every child.
        self.total_evaluations += (self.population.len() + next_gen.len()) as u64;
        self.population = next_gen;

        Ok(())
    }

    /// Run a single generation.
    ///
    /// Reports the current best, and breeds the next generation unless the
    /// best already matches the target.
    pub fn step(&mut self) -> Result<GenerationReport, EvolutionError> {
        if self.population.is_empty() {
            self.initialize()?;
        }

        let report = self.observe()?;
        if !report.converged {
            self.breed(report.best.fitness)?;
        }
        Ok(report)
    }

    /// Check if the search should stop after reporting a generation.
    fn should_stop(&self, report: &GenerationReport) -> Option<StopReason> {
        if report.converged {
            return Some(StopReason::Converged);
        }

        if let Some(limit) = self.config.max_generations
            && self.generation >= limit
        {
            return Some(StopReason::MaxGenerations);
        }

        None
    }

    /// Run the search with progress callback.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<SearchResult, EvolutionError>
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = Instant::now();

        self.initialize()?;

        let (report, stop_reason) = loop {
            let report = self.observe()?;
            callback(&report);

            if let Some(reason) = self.should_stop(&report) {
                break (report, reason);
            }

            self.breed(report.best.fitness)?;
        };

        let elapsed = start_time.elapsed().as_secs_f64();

        match stop_reason {
            StopReason::Converged => log::info!(
                "Converged on {:?} after {} generations ({} extinction events)",
                report.best.text,
                self.generation,
                self.extinction_events
            ),
            StopReason::MaxGenerations => log::info!(
                "Stopped at generation cap {} with best fitness {:.3}",
                self.generation,
                report.best.fitness
            ),
        }

        Ok(SearchResult {
            best: report.best,
            stats: SearchStats {
                generations: self.generation,
                total_evaluations: self.total_evaluations,
                extinction_events: self.extinction_events,
                elapsed_seconds: elapsed,
                evaluations_per_second: self.total_evaluations as f64 / elapsed.max(1e-9),
                stop_reason,
            },
            history: std::mem::take(&mut self.history),
        })
    }

    /// Run the search (blocking).
    pub fn run(&mut self) -> Result<SearchResult, EvolutionError> {
        self.run_with_callback(|_| {})
    }
}
