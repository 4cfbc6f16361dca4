//! Evolutionary search module for matching a target phrase.
//!
//! This module evolves fixed-length printable byte sequences toward a target
//! using fitness-proportional selection, alternating crossover and
//! per-position mutation.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Individuals** (`individual`): A byte sequence plus its fitness
//! - **Genome Operations** (`genome`): Random generation, crossover, and mutation
//! - **Fitness** (`fitness`): Position-wise match ratio against the target
//! - **Population** (`population`): Fixed-size generation of individuals
//! - **Mating Pool** (`pool`): Fitness-weighted resampling with extinction events
//! - **Reproduction** (`reproduction`): Builds the next generation from a pool
//! - **Search** (`search`): The generational driver loop
//!
//! # Example
//!
//! ```rust,no_run
//! use infinite_monkey::schema::SearchConfig;
//! use infinite_monkey::compute::evolution::EvolutionEngine;
//!
//! let config = SearchConfig {
//!     target: "hello".to_string(),
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(config)?;
//! let result = engine.run_with_callback(|report| {
//!     println!("{}", report.progress_line());
//! })?;
//!
//! println!("Converged after {} generations", result.stats.generations);
//! # Ok::<(), infinite_monkey::compute::evolution::EvolutionError>(())
//! ```

mod fitness;
mod genome;
mod individual;
mod pool;
mod population;
mod reproduction;
mod search;

pub use fitness::FitnessEvaluator;
pub use genome::{SequenceRng, crossover, hamming_distance};
pub use individual::Individual;
pub use pool::MatingPool;
pub use population::Population;
pub use reproduction::reproduce;
pub use search::EvolutionEngine;

use crate::schema::ConfigError;

/// Error type for evolution operations. None of these are recoverable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvolutionError {
    #[error("Sequence length {actual} does not match target length {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Best fitness {0} cannot be used to weight the mating pool")]
    DegenerateFitness(f64),

    #[error("Mating pool is empty")]
    EmptyPool,

    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),
}
