//! Integration tests
//!
//! Exercise the five strategies as a whole and pin their agreed-on behavior
//! against independently computed shortest costs.

use super::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).unwrap()
}

fn problem(initial: &[&str], goal: &[&str]) -> Problem {
    Problem {
        initial: board(initial),
        goal: board(goal),
        weights: MoveWeights::default(),
    }
}

fn moves_of(result: &SearchResult) -> usize {
    match result.solution.as_deref() {
        None | Some("") => 0,
        Some(path) => path.split("--").count(),
    }
}

/// Replay a solution from the given board, asserting every step is a legal
/// move, and return the final board with the accumulated cost.
fn replay(board: &Board, path: &str, weights: &MoveWeights) -> (Board, Cost) {
    let mut current = board.clone();
    let mut total = 0;
    if path.is_empty() {
        return (current, total);
    }
    for step in path.split("--") {
        let (next, cost) = current
            .successors(weights)
            .into_iter()
            .find(|(_, m)| m.to_string() == step)
            .map(|(b, m)| (b, m.cost))
            .expect("Replayed moves must be legal");
        current = next;
        total += cost;
    }
    (current, total)
}

/// Single-source shortest path costs over the reachable component, by
/// uniform-cost search. Moves are cost-symmetric, so the distances from the
/// goal double as the optimal remaining costs toward it.
fn shortest_costs(from: &Board, weights: &MoveWeights) -> HashMap<Board, Cost> {
    let mut dist: HashMap<Board, Cost> = HashMap::new();
    let mut frontier: Vec<(Cost, Board)> = vec![(0, from.clone())];
    dist.insert(from.clone(), 0);
    while !frontier.is_empty() {
        let next = frontier
            .iter()
            .enumerate()
            .min_by_key(|(_, (cost, _))| *cost)
            .map(|(i, _)| i)
            .unwrap();
        let (cost, board) = frontier.swap_remove(next);
        if dist.get(&board).copied() != Some(cost) {
            continue;
        }
        for (child, step) in board.successors(weights) {
            let relaxed = cost + step.cost;
            if dist.get(&child).map_or(true, |&d| relaxed < d) {
                dist.insert(child.clone(), relaxed);
                frontier.push((relaxed, child));
            }
        }
    }
    dist
}

/// A single blue marble one move away from its slot. The reachable space is
/// small enough to trace by hand, which pins the per-strategy node counts.
#[test]
fn single_marble_regression() {
    let problem = problem(
        &["B,_,_", "_,X,_", "_,_,_"],
        &["_,B,_", "_,X,_", "_,_,_"],
    );
    let expected_path = "(1,1):B:(1,2)";

    let result = solve_generic::<Bfs>(&problem);
    assert_eq!(result.solution.as_deref(), Some(expected_path));
    assert_eq!(result.cost, Some(1));
    assert_eq!(result.generated, 16);

    for (name, expected_generated) in [
        (Dfid::NAME, 5),
        (AStar::NAME, 5),
        (IdaStar::NAME, 5),
        (Dfbnb::NAME, 5),
    ] {
        let result = solve_by_name(name, &problem).unwrap();
        assert_eq!(result.solution.as_deref(), Some(expected_path), "{name}");
        assert_eq!(result.cost, Some(1), "{name}");
        assert_eq!(result.generated, expected_generated, "{name}");
    }
}

/// Blue must reach the walled-in corner. The unique fewest-move solution
/// sends the red blocker aside and back at cost 22; the cheapest solution
/// routes blue around a green wall in one extra move at cost 9.
fn walled_corner_problem() -> Problem {
    problem(
        &["_,G,G", "X,G,_", "R,B,_"],
        &["B,G,G", "X,G,_", "R,_,_"],
    )
}

#[test]
fn bfs_prefers_fewer_moves_over_cost() {
    let problem = walled_corner_problem();
    let bfs = solve_generic::<Bfs>(&problem);
    let astar = solve_generic::<AStar>(&problem);

    assert_eq!(
        bfs.solution.as_deref(),
        Some("(3,1):R:(3,3)--(3,2):B:(3,1)--(3,1):B:(1,1)--(3,3):R:(3,1)")
    );
    assert_eq!(bfs.cost, Some(22));
    assert_eq!(moves_of(&bfs), 4);

    assert_eq!(astar.cost, Some(9));
    assert_eq!(moves_of(&astar), 5);

    // The fewest-move path is strictly costlier than the optimum.
    assert!(bfs.cost.unwrap() > astar.cost.unwrap());
    assert!(moves_of(&bfs) < moves_of(&astar));
}

#[test]
fn optimal_strategies_agree_with_uniform_cost_search() {
    let problem = walled_corner_problem();
    let costs = shortest_costs(&problem.goal, &problem.weights);
    let optimal = costs[&problem.initial];
    assert_eq!(optimal, 9);

    for name in [AStar::NAME, IdaStar::NAME, Dfbnb::NAME] {
        let result = solve_by_name(name, &problem).unwrap();
        assert_eq!(result.cost, Some(optimal), "{name}");
        assert_eq!(moves_of(&result), 5, "{name}");
        let (replayed, cost) = replay(
            &problem.initial,
            result.solution.as_deref().unwrap(),
            &problem.weights,
        );
        assert_eq!(replayed, problem.goal, "{name}");
        assert_eq!(cost, optimal, "{name}");
    }

    // The fewest-move strategies find a valid but costlier path.
    for name in [Bfs::NAME, Dfid::NAME] {
        let result = solve_by_name(name, &problem).unwrap();
        assert_eq!(result.cost, Some(22), "{name}");
        assert_eq!(moves_of(&result), 4, "{name}");
        let (replayed, cost) = replay(
            &problem.initial,
            result.solution.as_deref().unwrap(),
            &problem.weights,
        );
        assert_eq!(replayed, problem.goal, "{name}");
        assert_eq!(cost, 22, "{name}");
    }
}

/// The heuristic must lower-bound the true remaining cost on every reachable
/// board, not just the initial one.
#[test]
fn heuristic_is_admissible_on_the_reachable_component() {
    let problem = walled_corner_problem();
    let heuristic = GoalDistance::new(&problem.goal, &problem.weights);
    let costs = shortest_costs(&problem.goal, &problem.weights);
    assert!(costs.len() > 100);
    for (board, &cost) in &costs {
        assert!(
            heuristic.evaluate(board) <= cost,
            "heuristic overestimates on:\n{board}"
        );
    }
}

#[test]
fn scrambled_boards_are_solved_by_every_strategy() {
    let weights = MoveWeights::default();
    let goal = board(&["R,G,_", "_,X,_", "B,_,G"]);

    for seed in [7, 99] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut initial = goal.clone();
        for _ in 0..4 {
            let successors = initial.successors(&weights);
            let (next, _) = successors.choose(&mut rng).expect("scramble has moves");
            initial = next.clone();
        }
        let problem = Problem {
            initial: initial.clone(),
            goal: goal.clone(),
            weights: weights.clone(),
        };
        let optimal = shortest_costs(&goal, &weights)[&initial];

        let mut fewest_moves = Vec::new();
        for name in STRATEGY_NAMES {
            let result = solve_by_name(name, &problem).unwrap();
            let path = result
                .solution
                .as_deref()
                .unwrap_or_else(|| panic!("{name} must solve seed {seed}"));
            let (replayed, cost) = replay(&initial, path, &weights);
            assert_eq!(replayed, goal, "{name}");
            assert_eq!(Some(cost), result.cost, "{name}");
            assert!(result.cost.unwrap() >= optimal, "{name}");
            match name {
                "A*" | "IDA*" | "DFBnB" => {
                    assert_eq!(result.cost, Some(optimal), "{name}")
                }
                _ => fewest_moves.push(moves_of(&result)),
            }
        }
        // BFS and DFID both return a fewest-move path.
        assert_eq!(fewest_moves[0], fewest_moves[1]);
    }
}
