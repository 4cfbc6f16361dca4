//! Infinite Monkey - Evolve random printable strings toward a target phrase.
//!
//! This crate implements the classic "weasel" style string search: a
//! population of random byte sequences is bred toward a fixed target with
//! fitness-proportional selection, alternating crossover and per-position
//! mutation, until one sequence matches exactly.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, progress, and result types
//! - `compute`: The evolutionary search (fitness, mating pool, reproduction, driver)
//!
//! # Example
//!
//! ```rust,no_run
//! use infinite_monkey::{EvolutionEngine, SearchConfig, StopReason};
//!
//! // Create configuration
//! let config = SearchConfig {
//!     target: "methinks".to_string(),
//!     random_seed: Some(7),
//!     ..Default::default()
//! };
//!
//! // Run until the target is matched
//! let mut engine = EvolutionEngine::new(config)?;
//! let result = engine.run()?;
//!
//! assert_eq!(result.stats.stop_reason, StopReason::Converged);
//! println!("Found {:?} in {} generations", result.best.text, result.stats.generations);
//! # Ok::<(), infinite_monkey::compute::evolution::EvolutionError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{EvolutionEngine, EvolutionError};
pub use schema::{GenerationReport, SearchConfig, SearchResult, StopReason};
