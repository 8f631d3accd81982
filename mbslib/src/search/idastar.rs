use super::*;

/// Iterative-deepening A*.
///
/// The outer loop raises a cost threshold, initialized to `h(initial)`. Each
/// iteration runs a depth-first traversal on an explicit stack with the
/// two-phase mark-then-requeue technique: a node is popped, marked, pushed
/// back beneath its children, and its later marked pop cleans its best-table
/// entry. Successors whose `f` exceeds the threshold are skipped but feed the
/// next threshold, the minimum excluded `f` of the iteration. When nothing is
/// excluded the space below the threshold is exhausted and no path exists.
pub struct IdaStar;

impl Strategy for IdaStar {
    const NAME: &'static str = "IDA*";

    fn search(problem: &Problem) -> SearchOutcome {
        let heuristic = GoalDistance::new(&problem.goal, &problem.weights);
        let mut arena = NodeArena::new();
        if problem.initial == problem.goal {
            let root = arena.push(Node::root(problem.initial.clone(), &heuristic));
            return SearchOutcome::found(&arena, root);
        }

        let mut threshold = heuristic.evaluate(&problem.initial);
        loop {
            log::debug!("starting iteration with threshold {threshold}");
            let mut next_threshold: Option<Cost> = None;
            let mut stack: Vec<NodeIndex> = Vec::new();
            let mut best: HashMap<Board, NodeIndex> = HashMap::new();
            let root = arena.push(Node::root(problem.initial.clone(), &heuristic));
            stack.push(root);
            best.insert(problem.initial.clone(), root);

            while let Some(index) = stack.pop() {
                let board = arena[index].board.clone();
                if arena[index].marked {
                    // Fully expanded; release its table entry unless a better
                    // node superseded it in the meantime.
                    if best.get(&board) == Some(&index) {
                        best.remove(&board);
                    }
                    continue;
                }
                // A superseded entry is skipped when its stale handle
                // surfaces instead of being spliced out of the stack.
                if best.get(&board) != Some(&index) {
                    continue;
                }
                arena[index].marked = true;
                stack.push(index);

                for child in arena.expand(index, &problem.weights, &heuristic) {
                    let f = arena[child].f();
                    if f > threshold {
                        next_threshold = Some(next_threshold.map_or(f, |t| t.min(f)));
                        continue;
                    }
                    let child_board = arena[child].board.clone();
                    // The table is the single source of truth for dominance:
                    // admit only unseen boards or strict improvements.
                    if let Some(&existing) = best.get(&child_board) {
                        if arena[existing].f() <= f {
                            continue;
                        }
                    }
                    if child_board == problem.goal {
                        return SearchOutcome::found(&arena, child);
                    }
                    best.insert(child_board, child);
                    stack.push(child);
                }
            }

            match next_threshold {
                Some(t) => threshold = t,
                // Nothing was excluded: the reachable space is exhausted.
                None => return SearchOutcome::not_found(&arena),
            }
        }
    }
}
