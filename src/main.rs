//! Infinite Monkey CLI - Evolve "to be or not to be" from random noise.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::io;
use std::time::Instant;

use infinite_monkey::{EvolutionEngine, SearchConfig};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let start = Instant::now();
    let config = SearchConfig::default();

    match serde_json::to_string(&config) {
        Ok(json) => log::debug!("Search configuration: {json}"),
        Err(e) => log::warn!("Could not serialize configuration: {e}"),
    }

    let mut engine = EvolutionEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Error creating search: {}", e);
        std::process::exit(1);
    });

    let mut stdout = io::stdout();
    let result = engine
        .run_with_callback(|report| {
            // A closed stdout must not abort the search.
            if let Err(e) = report.write_progress(&mut stdout) {
                log::debug!("Progress line not written: {e}");
            }
        })
        .unwrap_or_else(|e| {
            eprintln!();
            eprintln!("Error during search: {}", e);
            std::process::exit(1);
        });

    println!();
    println!("Time taken:{:?}", start.elapsed());

    log::info!(
        "{} generations, {} evaluations ({:.0}/s), {} extinction events",
        result.stats.generations,
        result.stats.total_evaluations,
        result.stats.evaluations_per_second,
        result.stats.extinction_events
    );
}
