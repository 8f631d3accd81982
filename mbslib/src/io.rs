//! Input output module.
//!
//! Contains the serialized representations of search problems, experiments
//! and their results, plus the input validation the search core relies on.

use crate::board::{Board, Cell, MoveWeights};
use crate::search::{self, Problem, SearchResult};
use crate::types::*;
use crate::SearchFailure;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

pub mod fs;

/// JSON representation of a marble board search problem.
///
/// `initial` and `goal` hold the grid rows, each row a comma-separated
/// sequence of single-character cell labels (`_` empty, `X` obstacle,
/// anything else a colored marble).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardProblem {
    pub name: Option<String>,
    /// Literal strategy name, one of [`search::STRATEGY_NAMES`].
    pub strategy: String,
    pub initial: Vec<String>,
    pub goal: Vec<String>,
    /// Move weight override; the default three-tier mapping applies when
    /// absent.
    #[serde(default)]
    pub weights: Option<HashMap<Label, Cost>>,
}

impl BoardProblem {
    /// Parse and validate the boards, producing the core [`Problem`].
    ///
    /// This is the external validation step of the contract: the search core
    /// itself assumes well-formed input. Rejected here: malformed rows,
    /// missing or duplicated obstacles, an obstacle that moves between the
    /// two boards, mismatched marble multisets, and marbles without a
    /// registered move weight.
    pub fn prepare(&self) -> Result<Problem, SearchFailure> {
        let initial = Board::from_rows(&self.initial)?;
        let goal = Board::from_rows(&self.goal)?;
        let weights = match &self.weights {
            Some(weights) => MoveWeights::from(weights.clone()),
            None => MoveWeights::default(),
        };

        let obstacle = obstacle_position(&initial)?;
        if obstacle_position(&goal)? != obstacle {
            return Err(SearchFailure::BadInput(
                "The obstacle must not move between the initial and goal boards".to_string(),
            ));
        }

        let mut initial_labels: Vec<Label> = initial.marbles().map(|(_, label)| label).collect();
        let mut goal_labels: Vec<Label> = goal.marbles().map(|(_, label)| label).collect();
        initial_labels.sort_unstable();
        goal_labels.sort_unstable();
        if initial_labels != goal_labels {
            return Err(SearchFailure::BadInput(
                "The initial and goal boards must hold the same marbles".to_string(),
            ));
        }

        for label in initial_labels {
            if !weights.is_weighted(label) {
                return Err(SearchFailure::BadInput(format!(
                    "No move weight registered for marble label '{}'",
                    label
                )));
            }
            if weights.weight(label) == 0 {
                return Err(SearchFailure::BadInput(format!(
                    "Move weight for marble label '{}' must be positive",
                    label
                )));
            }
        }

        Ok(Problem {
            initial,
            goal,
            weights,
        })
    }

    /// Validate the problem and solve it with its configured strategy.
    pub fn solve(&self) -> Result<SearchResult, SearchFailure> {
        let problem = self.prepare()?;
        search::solve_by_name(&self.strategy, &problem)
    }
}

/// Position of the single obstacle, or an error when there is none or more
/// than one.
fn obstacle_position(board: &Board) -> Result<Position, SearchFailure> {
    let mut found = None;
    for row in 0..crate::board::ROWS {
        for col in 0..crate::board::COLS {
            if board.get((row, col)) == Cell::Obstacle {
                if found.is_some() {
                    return Err(SearchFailure::BadInput(
                        "A board must hold exactly one obstacle".to_string(),
                    ));
                }
                found = Some((row, col));
            }
        }
    }
    found.ok_or_else(|| {
        SearchFailure::BadInput("A board must hold exactly one obstacle".to_string())
    })
}

/// A batch of problems, each solved with several strategies.
#[derive(Serialize, Deserialize, Debug)]
pub struct ExperimentTask {
    pub problems: Vec<BoardProblem>,
    pub strategies: Vec<String>,
}

/// A named experiment: a list of tasks.
#[derive(Serialize, Deserialize, Debug)]
pub struct Experiment {
    pub name: Option<String>,
    pub tasks: Vec<ExperimentTask>,
}

pub fn serialize_search_result<S>(
    result: &Result<SearchResult, SearchFailure>,
    s: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match result {
        Ok(result) => {
            let mut ser = s.serialize_map(Some(1))?;
            ser.serialize_entry("success", result)?;
            ser.end()
        }
        Err(failure) => {
            let mut ser = s.serialize_map(Some(2))?;
            ser.serialize_entry("error", failure)?;
            ser.serialize_entry("description", format!("{}", failure).as_str())?;
            ser.end()
        }
    }
}

/// Result of running one strategy on one problem of an experiment.
#[derive(Serialize, Debug)]
pub struct StrategyRunResult {
    pub problem: Option<String>,
    pub strategy: String,
    #[serde(serialize_with = "serialize_search_result")]
    pub result: Result<SearchResult, SearchFailure>,
}
