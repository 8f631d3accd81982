//! Search strategies over the toroidal marble board.
//!
//! Five interchangeable strategies explore the same state space, differing
//! only in open-list discipline, bound management and duplicate policy. Each
//! is selected by its literal name and reports a [`SearchResult`].

mod astar;
mod bfs;
mod dfbnb;
mod dfid;
mod heuristic;
mod idastar;
mod node;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfbnb::Dfbnb;
pub use dfid::Dfid;
pub use heuristic::GoalDistance;
pub use idastar::IdaStar;
pub use node::{Node, NodeArena};

use crate::board::*;
use crate::types::*;
use crate::SearchFailure;

use itertools::Itertools;
use serde::Serialize;
use std::collections::{BinaryHeap, VecDeque};
use std::time::Instant;

#[cfg(not(feature = "hashbrown"))]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "hashbrown")]
use hashbrown::{HashMap, HashSet};

/// Sentinel solution text reported when no path exists.
pub const NO_PATH: &str = "no path";
/// Sentinel cost text reported when no path exists.
pub const INFINITE_COST: &str = "inf";

/// A search problem: the initial and goal boards plus the cost model.
///
/// Input validation is the caller's responsibility (see [`crate::io`]); the
/// strategies assume a well-formed problem and do not re-validate.
pub struct Problem {
    pub initial: Board,
    pub goal: Board,
    pub weights: MoveWeights,
}

/// Outcome of a strategy's control loop, before timing is attached.
pub struct SearchOutcome {
    /// The reconstructed move sequence and its cost, or `None` when the state
    /// space was exhausted without reaching the goal.
    pub solution: Option<(String, Cost)>,
    /// Number of nodes generated over the whole search.
    pub generated: usize,
}

impl SearchOutcome {
    fn found(arena: &NodeArena, index: NodeIndex) -> SearchOutcome {
        SearchOutcome {
            solution: Some((arena.path_string(index), arena[index].g)),
            generated: arena.generated(),
        }
    }

    fn not_found(arena: &NodeArena) -> SearchOutcome {
        SearchOutcome {
            solution: None,
            generated: arena.generated(),
        }
    }
}

/// Immutable record of a completed search.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The `--`-joined move-label sequence; `None` when no path exists.
    pub solution: Option<String>,
    /// Number of nodes generated.
    pub generated: usize,
    /// Total path cost; `None` when no path exists.
    pub cost: Option<Cost>,
    /// Wall-clock runtime in seconds.
    pub runtime: f64,
}

impl SearchResult {
    /// The solution text, with the no-path sentinel on failure.
    pub fn solution_text(&self) -> &str {
        self.solution.as_deref().unwrap_or(NO_PATH)
    }

    /// The cost as text, with the infinity sentinel on failure.
    pub fn cost_text(&self) -> String {
        match self.cost {
            Some(cost) => cost.to_string(),
            None => INFINITE_COST.to_string(),
        }
    }
}

/// A search strategy, selected by its literal name.
pub trait Strategy {
    /// Name used to select this strategy.
    const NAME: &'static str;

    /// Run the search to completion on the given problem.
    fn search(problem: &Problem) -> SearchOutcome;
}

/// Run the given strategy and attach the wall-clock runtime.
pub fn solve_generic<S: Strategy>(problem: &Problem) -> SearchResult {
    let start_time = Instant::now();
    let SearchOutcome {
        solution,
        generated,
    } = S::search(problem);
    let runtime = start_time.elapsed().as_secs_f64();
    let (solution, cost) = match solution {
        Some((path, cost)) => (Some(path), Some(cost)),
        None => (None, None),
    };
    SearchResult {
        solution,
        generated,
        cost,
        runtime,
    }
}

/// Macro that compares a runtime strategy name against the `NAME` of each
/// listed strategy type and calls the matching [`solve_generic`] instance.
macro_rules! dispatch_strategy {
    ($name:expr, $problem:expr; $($strategy:ty),+ $(,)?) => {{
        let name: &str = $name;
        $(if name == <$strategy as Strategy>::NAME {
            return Ok(solve_generic::<$strategy>($problem));
        })+
        Err(SearchFailure::UnknownStrategy(name.to_string()))
    }};
}

/// The literal names of all available strategies.
pub const STRATEGY_NAMES: [&str; 5] = [
    Bfs::NAME,
    Dfid::NAME,
    AStar::NAME,
    IdaStar::NAME,
    Dfbnb::NAME,
];

/// Solve the problem with the strategy of the given name.
///
/// An unknown name is a configuration error surfaced before any search work
/// happens.
pub fn solve_by_name(name: &str, problem: &Problem) -> Result<SearchResult, SearchFailure> {
    dispatch_strategy!(name, problem; Bfs, Dfid, AStar, IdaStar, Dfbnb)
}


#[cfg(test)]
mod integration_tests;
