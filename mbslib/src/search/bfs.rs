use super::*;

/// Breadth-first search.
///
/// FIFO open list plus a closed set keyed by board identity, with an
/// open-membership set to avoid duplicate enqueues. Expansion order is
/// insertion order, so the returned path has the fewest moves, not
/// necessarily the lowest weighted cost; the reported cost is still the
/// accumulated `g` at the goal.
pub struct Bfs;

impl Strategy for Bfs {
    const NAME: &'static str = "BFS";

    fn search(problem: &Problem) -> SearchOutcome {
        let heuristic = GoalDistance::new(&problem.goal, &problem.weights);
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(problem.initial.clone(), &heuristic));

        let mut open: VecDeque<NodeIndex> = VecDeque::new();
        let mut in_open: HashSet<Board> = HashSet::new();
        let mut closed: HashSet<Board> = HashSet::new();
        open.push_back(root);
        in_open.insert(problem.initial.clone());

        while let Some(index) = open.pop_front() {
            let board = arena[index].board.clone();
            in_open.remove(&board);
            if closed.contains(&board) {
                continue;
            }
            if board == problem.goal {
                return SearchOutcome::found(&arena, index);
            }
            closed.insert(board);

            for child in arena.expand(index, &problem.weights, &heuristic) {
                let child_board = &arena[child].board;
                if closed.contains(child_board) || in_open.contains(child_board) {
                    continue;
                }
                in_open.insert(child_board.clone());
                open.push_back(child);
            }
        }
        SearchOutcome::not_found(&arena)
    }
}
