//! Admissible lower bound on the remaining path cost.

use super::*;

/// Cost-weighted toroidal Manhattan distance to the goal configuration.
///
/// For each marble, the minimum wrap-aware Manhattan distance to any goal
/// position holding the same label is multiplied by the label's move weight
/// and summed. Every marble is bounded independently, ignoring interference,
/// so the sum never exceeds the true remaining cost and the estimate is
/// admissible and consistent under the cost model.
pub struct GoalDistance {
    goal: Board,
    weights: MoveWeights,
    /// Goal positions of each label, precomputed once per search.
    positions: HashMap<Label, Vec<Position>>,
}

impl GoalDistance {
    pub fn new(goal: &Board, weights: &MoveWeights) -> GoalDistance {
        let mut positions: HashMap<Label, Vec<Position>> = HashMap::new();
        for (position, label) in goal.marbles() {
            positions.entry(label).or_default().push(position);
        }
        GoalDistance {
            goal: goal.clone(),
            weights: weights.clone(),
            positions,
        }
    }

    /// Evaluate the lower bound for the given board.
    pub fn evaluate(&self, board: &Board) -> Cost {
        if *board == self.goal {
            return 0;
        }
        board
            .marbles()
            .map(|(position, label)| {
                let nearest = self
                    .positions
                    .get(&label)
                    .and_then(|goals| {
                        goals
                            .iter()
                            .map(|&goal| toroidal_distance(position, goal))
                            .min()
                    })
                    .expect("Every marble label must occur on the goal board");
                nearest * self.weights.weight(label)
            })
            .sum()
    }
}

/// Wrap-aware Manhattan distance between two grid positions.
/// On each axis the distance is `min(|Δ|, dimension − |Δ|)`.
fn toroidal_distance(a: Position, b: Position) -> Cost {
    let rows = a.0.abs_diff(b.0);
    let cols = a.1.abs_diff(b.1);
    (rows.min(ROWS - rows) + cols.min(COLS - cols)) as Cost
}
