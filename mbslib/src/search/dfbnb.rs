use super::*;

/// Depth-first branch-and-bound.
///
/// Explicit stack with the same two-phase mark-then-requeue bookkeeping and
/// best-known table as IDA*. The incumbent bound starts unbounded and
/// tightens to the cost of each improved solution found; successors are
/// sorted ascending by `f`, so generation stops for a node as soon as one
/// exceeds the bound. The search continues past the first solution and
/// returns the best incumbent when the stack empties.
pub struct Dfbnb;

impl Strategy for Dfbnb {
    const NAME: &'static str = "DFBnB";

    fn search(problem: &Problem) -> SearchOutcome {
        let heuristic = GoalDistance::new(&problem.goal, &problem.weights);
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(problem.initial.clone(), &heuristic));
        if problem.initial == problem.goal {
            return SearchOutcome::found(&arena, root);
        }

        let mut bound: Option<Cost> = None;
        let mut incumbent: Option<NodeIndex> = None;
        let mut stack: Vec<NodeIndex> = vec![root];
        let mut best: HashMap<Board, NodeIndex> = HashMap::new();
        best.insert(problem.initial.clone(), root);

        while let Some(index) = stack.pop() {
            let board = arena[index].board.clone();
            if arena[index].marked {
                if best.get(&board) == Some(&index) {
                    best.remove(&board);
                }
                continue;
            }
            if best.get(&board) != Some(&index) {
                continue;
            }
            arena[index].marked = true;
            stack.push(index);

            let mut children = arena.expand(index, &problem.weights, &heuristic);
            children.sort_by_key(|&child| arena[child].f());

            for child in children {
                let f = arena[child].f();
                // Sorted ascending: once one successor exceeds the bound,
                // the remaining ones are all worse.
                if bound.map_or(false, |t| f > t) {
                    break;
                }
                let child_board = arena[child].board.clone();
                if let Some(&existing) = best.get(&child_board) {
                    if arena[existing].f() <= f {
                        continue;
                    }
                }
                if child_board == problem.goal {
                    let cost = arena[child].g;
                    if bound.map_or(true, |t| cost < t) {
                        log::info!("tightened incumbent bound to {cost}");
                        bound = Some(cost);
                        incumbent = Some(child);
                    }
                    break;
                }
                best.insert(child_board, child);
                stack.push(child);
            }
        }

        match incumbent {
            Some(index) => SearchOutcome::found(&arena, index),
            None => SearchOutcome::not_found(&arena),
        }
    }
}
