//! Configuration types for the string search.

use serde::{Deserialize, Serialize};

/// Lowest printable byte a candidate sequence can hold (space).
pub const PRINTABLE_MIN: u8 = 32;
/// Highest printable byte a candidate sequence can hold (`~`).
pub const PRINTABLE_MAX: u8 = 126;

/// Top-level search configuration.
///
/// Immutable once handed to the engine. The defaults reproduce the classic
/// "to be or not to be" run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Phrase the population evolves toward. Defines the sequence length.
    #[serde(default = "default_target")]
    pub target: String,
    /// Number of individuals in every generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Per-position probability of replacing a child's byte (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Per-generation probability of collapsing the mating pool (0.0-1.0).
    #[serde(default = "default_extinction_rate")]
    pub extinction_rate: f64,
    /// Stop after this many generations even without a match.
    /// `None` runs until convergence.
    #[serde(default)]
    pub max_generations: Option<usize>,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Keep per-generation fitness and diversity series in the result.
    #[serde(default)]
    pub record_history: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            population_size: default_population_size(),
            mutation_rate: default_mutation_rate(),
            extinction_rate: default_extinction_rate(),
            max_generations: None,
            random_seed: None,
            record_history: false,
        }
    }
}

fn default_target() -> String {
    "to be or not to be".to_string()
}
fn default_population_size() -> usize {
    500
}
fn default_mutation_rate() -> f64 {
    0.005
}
fn default_extinction_rate() -> f64 {
    0.01
}

impl SearchConfig {
    /// Target phrase as raw bytes.
    #[inline]
    pub fn target_bytes(&self) -> &[u8] {
        self.target.as_bytes()
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        // Mutation only ever draws printable bytes, so anything else is unreachable.
        if let Some((index, &byte)) = self
            .target_bytes()
            .iter()
            .enumerate()
            .find(|(_, b)| !(PRINTABLE_MIN..=PRINTABLE_MAX).contains(*b))
        {
            return Err(ConfigError::NonPrintableTarget { index, byte });
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.extinction_rate) {
            return Err(ConfigError::InvalidExtinctionRate(self.extinction_rate));
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationCap);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Target phrase must not be empty")]
    EmptyTarget,
    #[error("Target byte {byte} at index {index} is outside the printable range 32..=126")]
    NonPrintableTarget { index: usize, byte: u8 },
    #[error("Population size must be at least 2")]
    PopulationTooSmall,
    #[error("Mutation rate {0} must be between 0 and 1")]
    InvalidMutationRate(f64),
    #[error("Extinction rate {0} must be between 0 and 1")]
    InvalidExtinctionRate(f64),
    #[error("Generation cap must be positive when set")]
    ZeroGenerationCap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target, "to be or not to be");
        assert_eq!(config.population_size, 500);
        assert_eq!(config.mutation_rate, 0.005);
        assert_eq!(config.extinction_rate, 0.01);
        assert_eq!(config.max_generations, None);
        assert!(!config.record_history);
    }

    #[test]
    fn test_rejects_empty_target() {
        let config = SearchConfig {
            target: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyTarget));
    }

    #[test]
    fn test_rejects_non_printable_target() {
        let config = SearchConfig {
            target: "ab\tc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPrintableTarget { index: 2, byte: b'\t' })
        );
    }

    #[test]
    fn test_rejects_bad_rates() {
        let config = SearchConfig {
            mutation_rate: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMutationRate(1.5)));

        let config = SearchConfig {
            extinction_rate: -0.1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidExtinctionRate(-0.1))
        );

        let config = SearchConfig {
            mutation_rate: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMutationRate(_))
        ));
    }

    #[test]
    fn test_rejects_small_population_and_zero_cap() {
        let config = SearchConfig {
            population_size: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall));

        let config = SearchConfig {
            max_generations: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerationCap));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig {
            random_seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: SearchConfig = serde_json::from_str(r#"{"target": "abc"}"#).unwrap();
        assert_eq!(parsed.target, "abc");
        assert_eq!(parsed.population_size, 500);
        assert_eq!(parsed.random_seed, None);
        assert!(!parsed.record_history);
    }
}
