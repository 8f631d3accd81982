//! A module responsible for problem and experiment file operations.
use super::{BoardProblem, Experiment, StrategyRunResult};

use std::io::prelude::*;
use std::path::Path;

impl BoardProblem {
    /// Read a problem from a JSON file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<BoardProblem> {
        let content = std::fs::read_to_string(&path)?;
        let problem: BoardProblem = serde_json::from_str(&content)?;
        Ok(problem)
    }
}

/// Read an experiment from a JSON file.
pub fn read_experiment_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Experiment> {
    let content = std::fs::read_to_string(&path)?;
    let experiment: Experiment = serde_json::from_str(&content)?;
    Ok(experiment)
}

/// Save experiment results as a human-readable (pretty) JSON file.
pub fn save_results<P: AsRef<Path>>(results: &[StrategyRunResult], path: P) -> std::io::Result<()> {
    let content = match serde_json::to_string_pretty(results) {
        Ok(s) => s,
        Err(e) => {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };
    let mut file = std::fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    log::info!("Saved results: {}", path.as_ref().display());
    Ok(())
}
