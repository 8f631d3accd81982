use super::*;

/// A search node: a board together with the bookkeeping needed to order,
/// deduplicate and reconstruct paths.
///
/// Nodes live in a [`NodeArena`] and refer to each other by handle, so the
/// parent chain is walked backward without any reference cycles.
pub struct Node {
    pub board: Board,
    /// Cumulative path cost from the initial board.
    pub g: Cost,
    /// Heuristic estimate to the goal, computed once at construction.
    pub h: Cost,
    /// Handle of the parent node; `None` for the root.
    pub parent: Option<NodeIndex>,
    /// The move that produced this node; `None` for the root.
    pub step: Option<Move>,
    /// Transient flag used by the stack-based strategies to tell a first
    /// expansion from the cleanup visit.
    pub marked: bool,
}

impl Node {
    /// The root node for a search starting at the given board.
    pub fn root(board: Board, heuristic: &GoalDistance) -> Node {
        let h = heuristic.evaluate(&board);
        Node {
            board,
            g: 0,
            h,
            parent: None,
            step: None,
            marked: false,
        }
    }

    /// Total estimated cost `f = g + h`.
    #[inline]
    pub fn f(&self) -> Cost {
        self.g + self.h
    }
}

/// Handle-indexed storage for every node a search generates.
///
/// The arena length doubles as the generated-node count reported in results:
/// the root plus every successor constructed by move generation.
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    /// Add a node and return its handle.
    pub fn push(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    /// Number of nodes generated so far.
    #[inline]
    pub fn generated(&self) -> usize {
        self.nodes.len()
    }

    /// Generate all successor nodes of the node at the given handle.
    pub fn expand(
        &mut self,
        parent: NodeIndex,
        weights: &MoveWeights,
        heuristic: &GoalDistance,
    ) -> Vec<NodeIndex> {
        let board = self[parent].board.clone();
        let g = self[parent].g;
        board
            .successors(weights)
            .into_iter()
            .map(|(child, step)| {
                let h = heuristic.evaluate(&child);
                self.push(Node {
                    board: child,
                    g: g + step.cost,
                    h,
                    parent: Some(parent),
                    step: Some(step),
                    marked: false,
                })
            })
            .collect()
    }

    /// Reconstruct the move sequence leading to the given node by walking the
    /// parent chain back to the root. Returns the `--`-joined move labels,
    /// root excluded.
    pub fn path_string(&self, index: NodeIndex) -> String {
        let mut moves = Vec::new();
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self[i];
            if let Some(step) = &node.step {
                moves.push(step.to_string());
            }
            current = node.parent;
        }
        moves.iter().rev().join("--")
    }
}

impl std::ops::Index<NodeIndex> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeIndex> for NodeArena {
    #[inline]
    fn index_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn expand_accumulates_costs() {
        let weights = MoveWeights::default();
        let goal = board(&["_,R,_", "_,X,_", "_,_,_"]);
        let heuristic = GoalDistance::new(&goal, &weights);
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(board(&["R,_,_", "_,X,_", "_,_,_"]), &heuristic));
        let children = arena.expand(root, &weights, &heuristic);
        assert_eq!(children.len(), 4);
        assert_eq!(arena.generated(), 5);
        for child in children {
            assert_eq!(arena[child].g, 10);
            assert_eq!(arena[child].parent, Some(root));
            assert_eq!(arena[child].f(), arena[child].g + arena[child].h);
        }
    }

    #[test]
    fn path_string_walks_parent_chain() {
        let weights = MoveWeights::default();
        let goal = board(&["_,_,B", "_,X,_", "_,_,_"]);
        let heuristic = GoalDistance::new(&goal, &weights);
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(board(&["B,_,_", "_,X,_", "_,_,_"]), &heuristic));
        assert_eq!(arena.path_string(root), "");

        // Walk the marble two cells to the right by hand.
        let first = board(&["_,B,_", "_,X,_", "_,_,_"]);
        let a = arena.push(Node {
            board: first,
            g: 1,
            h: 1,
            parent: Some(root),
            step: Some(Move {
                from: (0, 0),
                label: 'B',
                to: (0, 1),
                cost: 1,
            }),
            marked: false,
        });
        let second = board(&["_,_,B", "_,X,_", "_,_,_"]);
        let b = arena.push(Node {
            board: second,
            g: 2,
            h: 0,
            parent: Some(a),
            step: Some(Move {
                from: (0, 1),
                label: 'B',
                to: (0, 2),
                cost: 1,
            }),
            marked: false,
        });
        assert_eq!(arena.path_string(b), "(1,1):B:(1,2)--(1,2):B:(1,3)");
    }
}
