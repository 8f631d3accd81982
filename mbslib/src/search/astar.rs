use super::*;

use std::cmp::Ordering;

/// A* search.
///
/// Binary-heap open list ordered by ascending `f`, a best-known table from
/// board to the lowest-f node discovered for it, and lazy deletion instead of
/// heap decrease-key: a popped entry that is no longer its board's best is
/// discarded. The goal test happens on pop, which guarantees optimality with
/// an admissible heuristic.
pub struct AStar;

/// Open-list entry with reversed ordering so the binary heap pops the
/// lowest `f` first; ties break toward the oldest node.
#[derive(PartialEq, Eq)]
struct OpenEntry {
    f: Cost,
    index: NodeIndex,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Strategy for AStar {
    const NAME: &'static str = "A*";

    fn search(problem: &Problem) -> SearchOutcome {
        let heuristic = GoalDistance::new(&problem.goal, &problem.weights);
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(problem.initial.clone(), &heuristic));

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut best: HashMap<Board, NodeIndex> = HashMap::new();
        open.push(OpenEntry {
            f: arena[root].f(),
            index: root,
        });
        best.insert(problem.initial.clone(), root);

        while let Some(OpenEntry { index, .. }) = open.pop() {
            let board = arena[index].board.clone();
            // Lazy deletion: a better node for this board was admitted after
            // this entry was pushed.
            if best.get(&board) != Some(&index) {
                continue;
            }
            if board == problem.goal {
                return SearchOutcome::found(&arena, index);
            }

            for child in arena.expand(index, &problem.weights, &heuristic) {
                let f = arena[child].f();
                let child_board = arena[child].board.clone();
                // Admit only unseen boards or strict improvements.
                if let Some(&existing) = best.get(&child_board) {
                    if arena[existing].f() <= f {
                        continue;
                    }
                }
                best.insert(child_board, child);
                open.push(OpenEntry { f, index: child });
            }
        }
        SearchOutcome::not_found(&arena)
    }
}
