//! Board state representation and move generation.

use crate::types::*;
use crate::SearchFailure;

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

/// Number of rows on the board.
pub const ROWS: usize = 3;
/// Number of columns on the board.
pub const COLS: usize = 3;
/// Total number of cells on the board.
pub const CELL_COUNT: usize = ROWS * COLS;

/// The four cardinal directions as (row, column) offsets.
/// Order determines the successor generation order.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Content of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Obstacle,
    Marble(Label),
}

impl Cell {
    /// Parse a cell from its single-character label.
    /// `_` is empty, `X` is the obstacle, anything else is a colored marble.
    pub fn from_label(label: char) -> Cell {
        match label {
            '_' => Cell::Empty,
            'X' => Cell::Obstacle,
            other => Cell::Marble(other),
        }
    }

    /// The single-character label of this cell.
    pub fn label(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Obstacle => 'X',
            Cell::Marble(label) => *label,
        }
    }
}

/// A snapshot of marble positions on the toroidal grid.
///
/// Boards are never mutated after construction; every successor is a fresh,
/// independent copy. Equality and hash are deep, cell by cell.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Parse a board from grid rows, each row a comma-separated sequence of
    /// single-character cell labels.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, SearchFailure> {
        if rows.len() != ROWS {
            return Err(SearchFailure::BadInput(format!(
                "Expected {} board rows, got {}",
                ROWS,
                rows.len()
            )));
        }
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row, line) in rows.iter().enumerate() {
            let labels: Vec<&str> = line.as_ref().split(',').map(str::trim).collect();
            if labels.len() != COLS {
                return Err(SearchFailure::BadInput(format!(
                    "Expected {} cells in row {}, got {}",
                    COLS,
                    row + 1,
                    labels.len()
                )));
            }
            for (col, label) in labels.into_iter().enumerate() {
                let mut chars = label.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(c), None) => Cell::from_label(c),
                    _ => {
                        return Err(SearchFailure::BadInput(format!(
                            "Cell ({},{}) must hold a single-character label, got \"{}\"",
                            row + 1,
                            col + 1,
                            label
                        )));
                    }
                };
                cells[row * COLS + col] = cell;
            }
        }
        Ok(Board { cells })
    }

    /// Get the cell at the given position.
    #[inline]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.0 * COLS + position.1]
    }

    #[inline]
    fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.0 * COLS + position.1] = cell;
    }

    /// The toroidal neighbor of a position in the given direction.
    #[inline]
    fn neighbor(position: Position, direction: (isize, isize)) -> Position {
        let row = (position.0 as isize + direction.0).rem_euclid(ROWS as isize);
        let col = (position.1 as isize + direction.1).rem_euclid(COLS as isize);
        (row as usize, col as usize)
    }

    /// Iterate over all marbles on the board with their positions,
    /// in row-major order.
    pub fn marbles(&self) -> impl Iterator<Item = (Position, Label)> + '_ {
        iproduct!(0..ROWS, 0..COLS).filter_map(|position| match self.get(position) {
            Cell::Marble(label) => Some((position, label)),
            _ => None,
        })
    }

    /// Generate all boards reachable with a single move, with the move that
    /// produces each of them.
    ///
    /// For every marble and every toroidal direction whose destination cell is
    /// empty, the marble is relocated on a fresh copy of the board. Marbles are
    /// visited in row-major order and directions in up, down, left, right
    /// order, which fixes the generation order.
    pub fn successors(&self, weights: &MoveWeights) -> Vec<(Board, Move)> {
        let mut successors = Vec::new();
        for (from, label) in self.marbles() {
            for direction in DIRECTIONS {
                let to = Self::neighbor(from, direction);
                if self.get(to) != Cell::Empty {
                    continue;
                }
                let mut child = self.clone();
                child.set(to, Cell::Marble(label));
                child.set(from, Cell::Empty);
                let step = Move {
                    from,
                    label,
                    to,
                    cost: weights.weight(label),
                };
                successors.push((child, step));
            }
        }
        successors
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let labels: Vec<String> = (0..COLS)
                .map(|col| self.get((row, col)).label().to_string())
                .collect();
            writeln!(f, "{}", labels.join(","))?;
        }
        Ok(())
    }
}

/// Relocation of a single marble to an adjacent empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub label: Label,
    pub to: Position,
    pub cost: Cost,
}

impl fmt::Display for Move {
    /// Format as `(row,col):label:(row,col)` with 1-indexed coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}):{}:({},{})",
            self.from.0 + 1,
            self.from.1 + 1,
            self.label,
            self.to.0 + 1,
            self.to.1 + 1
        )
    }
}

/// Fixed cost charged for relocating a marble of a given color by one cell.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MoveWeights(HashMap<Label, Cost>);

impl Default for MoveWeights {
    /// The three-tier default weighting: blue 1, green 3, red 10.
    fn default() -> Self {
        MoveWeights(HashMap::from_iter([('B', 1), ('G', 3), ('R', 10)]))
    }
}

impl From<HashMap<Label, Cost>> for MoveWeights {
    fn from(weights: HashMap<Label, Cost>) -> Self {
        MoveWeights(weights)
    }
}

impl MoveWeights {
    /// The move cost for a marble of the given color.
    ///
    /// Panics when the label has no registered weight; a marble the cost model
    /// does not know is a malformed domain configuration, not a recoverable
    /// condition.
    #[inline]
    pub fn weight(&self, label: Label) -> Cost {
        *self
            .0
            .get(&label)
            .unwrap_or_else(|| panic!("No move weight registered for marble label '{}'", label))
    }

    /// Whether the given label has a registered weight.
    pub fn is_weighted(&self, label: Label) -> bool {
        self.0.contains_key(&label)
    }
}
