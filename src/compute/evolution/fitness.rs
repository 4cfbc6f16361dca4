//! Fitness evaluation against the target phrase.

use super::EvolutionError;
use super::individual::Individual;

/// Scores individuals by the fraction of positions matching the target.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    target: Vec<u8>,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator for a target.
    pub fn new(target: impl Into<Vec<u8>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Length every individual must have.
    #[inline]
    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// Score a raw sequence: matching positions divided by target length.
    ///
    /// An empty target against an empty sequence scores 1.0.
    pub fn score(&self, sequence: &[u8]) -> Result<f64, EvolutionError> {
        if sequence.len() != self.target.len() {
            return Err(EvolutionError::LengthMismatch {
                expected: self.target.len(),
                actual: sequence.len(),
            });
        }
        if self.target.is_empty() {
            return Ok(1.0);
        }

        let matches = sequence
            .iter()
            .zip(&self.target)
            .filter(|(a, b)| a == b)
            .count();

        Ok(matches as f64 / self.target.len() as f64)
    }

    /// Evaluate an individual, storing and returning its fitness.
    pub fn evaluate(&self, individual: &mut Individual) -> Result<f64, EvolutionError> {
        let fitness = self.score(individual.sequence())?;
        individual.set_fitness(fitness);
        Ok(fitness)
    }

    /// Byte-for-byte equality with the target.
    #[inline]
    pub fn is_match(&self, sequence: &[u8]) -> bool {
        sequence == self.target.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_partial_match() {
        let evaluator = FitnessEvaluator::new("abcd");
        let mut individual = Individual::new(b"abzz".to_vec());
        let fitness = evaluator.evaluate(&mut individual).unwrap();
        assert_eq!(fitness, 0.5);
        assert_eq!(individual.fitness(), 0.5);
    }

    #[test]
    fn test_order_sensitive() {
        let evaluator = FitnessEvaluator::new("abc");
        assert_eq!(evaluator.score(b"cab").unwrap(), 0.0);
        assert_eq!(evaluator.score(b"abc").unwrap(), 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let evaluator = FitnessEvaluator::new("abc");
        let mut individual = Individual::new(b"ab".to_vec());
        assert_eq!(
            evaluator.evaluate(&mut individual),
            Err(EvolutionError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let evaluator = FitnessEvaluator::new("to be or not to be");
        let mut individual = Individual::new(b"to be or nXt tX be".to_vec());
        let first = evaluator.evaluate(&mut individual).unwrap();
        let second = evaluator.evaluate(&mut individual).unwrap();
        assert_eq!(first, second);
        assert_eq!(individual.fitness(), 16.0 / 18.0);
    }

    #[test]
    fn test_is_match() {
        let evaluator = FitnessEvaluator::new("abc");
        assert!(evaluator.is_match(b"abc"));
        assert!(!evaluator.is_match(b"abd"));
        assert!(!evaluator.is_match(b"ab"));
    }

    proptest! {
        #[test]
        fn prop_fitness_in_unit_range(
            (target, candidate) in (1usize..40).prop_flat_map(|len| (
                proptest::collection::vec(32u8..=126, len),
                proptest::collection::vec(32u8..=126, len),
            ))
        ) {
            let evaluator = FitnessEvaluator::new(target.clone());
            let fitness = evaluator.score(&candidate).unwrap();
            prop_assert!((0.0..=1.0).contains(&fitness));
            prop_assert_eq!(fitness == 1.0, candidate == target);
        }

        #[test]
        fn prop_self_match_is_perfect(target in proptest::collection::vec(any::<u8>(), 1..64)) {
            let evaluator = FitnessEvaluator::new(target.clone());
            prop_assert_eq!(evaluator.score(&target).unwrap(), 1.0);
        }
    }
}
