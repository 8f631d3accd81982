use super::*;

/// Iterative-deepening depth-first search.
///
/// The outer loop raises a depth limit from 1; the inner depth-limited search
/// keeps a visited set for the current branch only, inserted on entry and
/// removed on backtrack. The goal test happens before the depth cutoff, so a
/// goal exactly at the limit is still found. A depth level that completes
/// without hitting the cutoff proves the space exhausted, which terminates
/// the outer loop with the no-path result.
pub struct Dfid;

/// Outcome of one depth-limited traversal.
enum DepthLimited {
    Found(NodeIndex),
    /// The depth limit was hit somewhere; deepening may still find a path.
    Cutoff,
    /// Every acyclic path was fully explored below the limit.
    Exhausted,
}

impl Strategy for Dfid {
    const NAME: &'static str = "DFID";

    fn search(problem: &Problem) -> SearchOutcome {
        let heuristic = GoalDistance::new(&problem.goal, &problem.weights);
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(problem.initial.clone(), &heuristic));

        let mut limit = 1;
        loop {
            let mut visited: HashSet<Board> = HashSet::new();
            match depth_limited(&mut arena, problem, &heuristic, root, limit, &mut visited) {
                DepthLimited::Found(index) => {
                    return SearchOutcome::found(&arena, index);
                }
                DepthLimited::Cutoff => {
                    log::debug!("depth limit {limit} exhausted, deepening");
                    limit += 1;
                }
                DepthLimited::Exhausted => {
                    return SearchOutcome::not_found(&arena);
                }
            }
        }
    }
}

fn depth_limited(
    arena: &mut NodeArena,
    problem: &Problem,
    heuristic: &GoalDistance,
    index: NodeIndex,
    limit: usize,
    visited: &mut HashSet<Board>,
) -> DepthLimited {
    let board = arena[index].board.clone();
    if board == problem.goal {
        return DepthLimited::Found(index);
    }
    if limit == 0 {
        return DepthLimited::Cutoff;
    }
    visited.insert(board.clone());

    let mut cutoff = false;
    for child in arena.expand(index, &problem.weights, heuristic) {
        // Cycle avoidance along the current path only, not globally.
        if visited.contains(&arena[child].board) {
            continue;
        }
        match depth_limited(arena, problem, heuristic, child, limit - 1, visited) {
            DepthLimited::Found(goal) => return DepthLimited::Found(goal),
            DepthLimited::Cutoff => cutoff = true,
            DepthLimited::Exhausted => {}
        }
    }

    visited.remove(&board);
    if cutoff {
        DepthLimited::Cutoff
    } else {
        DepthLimited::Exhausted
    }
}
