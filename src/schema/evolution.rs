//! Progress and result types reported by the evolution engine.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Progress update emitted once per generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Current generation number (starts at 1).
    pub generation: usize,
    /// Best sequence of this generation.
    pub best: IndividualSnapshot,
    /// Average fitness of the current population.
    pub avg_fitness: f64,
    /// Whether the best sequence matches the target exactly.
    pub converged: bool,
}

impl GenerationReport {
    /// Render the single progress line printed by the CLI.
    pub fn progress_line(&self) -> String {
        format!(
            "generation:{} | {} | fitness: {:.2}",
            self.generation, self.best.text, self.best.fitness
        )
    }

    /// Redraw the progress line in place and flush.
    pub fn write_progress<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\r {}", self.progress_line())?;
        out.flush()
    }
}

/// Snapshot of an individual for display and serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualSnapshot {
    /// Raw sequence bytes.
    pub sequence: Vec<u8>,
    /// Sequence rendered as text (lossy for non-UTF-8 bytes).
    pub text: String,
    /// Fitness score in [0, 1].
    pub fitness: f64,
}

/// Evolution history for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchHistory {
    /// Best fitness per generation.
    pub best_fitness: Vec<f64>,
    /// Average fitness per generation.
    pub avg_fitness: Vec<f64>,
    /// Normalised distance of the population from its best member.
    pub diversity: Vec<f64>,
}

impl SearchHistory {
    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best individual of the last generation.
    pub best: IndividualSnapshot,
    /// Statistics from the run.
    pub stats: SearchStats,
    /// Full history for analysis.
    pub history: SearchHistory,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total generations run.
    pub generations: usize,
    /// Total fitness evaluations performed.
    pub total_evaluations: u64,
    /// Number of generations whose mating pool collapsed.
    pub extinction_events: usize,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Evaluations per second.
    pub evaluations_per_second: f64,
    /// Reason for stopping.
    pub stop_reason: StopReason,
}

/// Reason the search stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// Best sequence matched the target exactly.
    Converged,
    /// Reached the configured generation cap.
    MaxGenerations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_format() {
        let report = GenerationReport {
            generation: 12,
            best: IndividualSnapshot {
                sequence: b"to be".to_vec(),
                text: "to be".to_string(),
                fitness: 0.4,
            },
            avg_fitness: 0.1,
            converged: false,
        };
        assert_eq!(report.progress_line(), "generation:12 | to be | fitness: 0.40");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn sample_report() -> GenerationReport {
        GenerationReport {
            generation: 3,
            best: IndividualSnapshot {
                sequence: b"abc".to_vec(),
                text: "abc".to_string(),
                fitness: 1.0,
            },
            avg_fitness: 0.5,
            converged: true,
        }
    }

    #[test]
    fn test_write_progress_redraws_line() {
        let mut out = Vec::new();
        sample_report().write_progress(&mut out).unwrap();
        assert_eq!(out, b"\r generation:3 | abc | fitness: 1.00");
    }

    #[test]
    fn test_write_progress_reports_io_errors() {
        let err = sample_report().write_progress(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_result_serialization() {
        let result = SearchResult {
            best: IndividualSnapshot {
                sequence: b"abc".to_vec(),
                text: "abc".to_string(),
                fitness: 1.0,
            },
            stats: SearchStats {
                generations: 3,
                total_evaluations: 150,
                extinction_events: 0,
                elapsed_seconds: 0.01,
                evaluations_per_second: 15000.0,
                stop_reason: StopReason::Converged,
            },
            history: SearchHistory::default(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.best, result.best);
        assert_eq!(parsed.stats.stop_reason, StopReason::Converged);
        assert!(parsed.history.is_empty());
    }
}
