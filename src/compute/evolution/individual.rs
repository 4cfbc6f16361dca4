//! A single candidate sequence.

use crate::schema::IndividualSnapshot;

/// A candidate byte sequence and its fitness.
///
/// The sequence length is fixed at construction; only its bytes can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    sequence: Vec<u8>,
    fitness: f64,
}

impl Individual {
    /// Create an unevaluated individual (fitness 0).
    pub fn new(sequence: Vec<u8>) -> Self {
        Self {
            sequence,
            fitness: 0.0,
        }
    }

    /// The raw sequence.
    #[inline]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Mutable view of the bytes. Length cannot change through a slice.
    #[inline]
    pub(crate) fn sequence_mut(&mut self) -> &mut [u8] {
        &mut self.sequence
    }

    /// Fitness from the most recent evaluation.
    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    #[inline]
    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Sequence length.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Sequence rendered as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }

    /// Convert to snapshot for reporting.
    pub fn to_snapshot(&self) -> IndividualSnapshot {
        IndividualSnapshot {
            sequence: self.sequence.clone(),
            text: self.text(),
            fitness: self.fitness,
        }
    }
}
