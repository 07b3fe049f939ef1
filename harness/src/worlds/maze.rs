//! `Maze`: a grid world parsed from a text layout.
//!
//! Layout characters:
//!
//! | char    | meaning            |
//! |---------|--------------------|
//! | `%`     | wall               |
//! | `P`     | start (exactly one)|
//! | `.`     | goal (at least one)|
//! | space   | open floor         |
//!
//! Row 0 is the top line of the layout; `North` decreases the row.
//! Successors are generated in `North, South, East, West` order.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use wayfinder_search::{SearchProblem, Successor};

/// The fixed tiny maze.
pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%";

/// A grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `direction`, or `None` off the top/left edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::East => (self.row, self.col + 1),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        Some(Self { row, col })
    }

    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        dr.hypot(dc)
    }
}

/// A move between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Successor generation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// Layout parse and load failures.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze layout is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, tile: char },

    #[error("maze layout has no start tile 'P'")]
    MissingStart,

    #[error("maze layout has a second start tile at {second:?} (first at {first:?})")]
    MultipleStarts { first: Position, second: Position },

    #[error("maze layout has no goal tile '.'")]
    NoGoal,

    #[error("failed to read maze layout: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-cell step cost: the cost of moving *into* a position.
pub type CostFn = Box<dyn Fn(Position) -> f64 + Send + Sync>;

/// A rectangular grid maze with one start and one or more goals.
pub struct Maze {
    walls: Vec<Vec<bool>>,
    width: usize,
    start: Position,
    goals: Vec<Position>,
    cost_fn: Option<CostFn>,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maze")
            .field("width", &self.width)
            .field("height", &self.walls.len())
            .field("start", &self.start)
            .field("goals", &self.goals)
            .field("custom_cost", &self.cost_fn.is_some())
            .finish_non_exhaustive()
    }
}

impl Maze {
    /// Parse a layout.
    ///
    /// Trailing `\r` is stripped from each line. All rows must be the same
    /// width.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError`] for an empty or ragged layout, an unknown tile,
    /// or a missing/duplicated start or missing goal.
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut walls = Vec::with_capacity(lines.len());
        let mut start: Option<Position> = None;
        let mut goals = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            let mut wall_row = Vec::with_capacity(width);
            for (col, tile) in line.chars().enumerate() {
                let here = Position::new(row, col);
                match tile {
                    '%' | ' ' => {}
                    'P' => match start {
                        Some(first) => {
                            return Err(MazeError::MultipleStarts {
                                first,
                                second: here,
                            })
                        }
                        None => start = Some(here),
                    },
                    '.' => goals.push(here),
                    _ => return Err(MazeError::UnknownTile { row, col, tile }),
                }
                wall_row.push(tile == '%');
            }
            walls.push(wall_row);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        if goals.is_empty() {
            return Err(MazeError::NoGoal);
        }
        Ok(Self {
            walls,
            width,
            start,
            goals,
            cost_fn: None,
        })
    }

    /// Read and parse a layout file.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Maze::parse`].
    pub fn load(path: &Path) -> Result<Self, MazeError> {
        let layout = std::fs::read_to_string(path)?;
        Self::parse(&layout)
    }

    /// The tiny maze.
    ///
    /// # Panics
    ///
    /// Never: [`TINY_MAZE`] is a valid layout (covered by tests).
    #[must_use]
    pub fn tiny() -> Self {
        Self::parse(TINY_MAZE).unwrap_or_else(|e| unreachable!("TINY_MAZE is valid: {e}"))
    }

    /// A walled `rows × cols` room (interior size) with the start in the
    /// top-left corner and the goal in the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero, or both are one.
    #[must_use]
    pub fn open_room(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "room must be non-empty");
        assert!(rows * cols > 1, "room needs distinct start and goal cells");
        let mut layout = String::new();
        let border = "%".repeat(cols + 2);
        layout.push_str(&border);
        layout.push('\n');
        for row in 0..rows {
            layout.push('%');
            for col in 0..cols {
                let tile = if row == 0 && col == 0 {
                    'P'
                } else if row == rows - 1 && col == cols - 1 {
                    '.'
                } else {
                    ' '
                };
                layout.push(tile);
            }
            layout.push_str("%\n");
        }
        layout.push_str(&border);
        Self::parse(&layout).unwrap_or_else(|e| unreachable!("generated room is valid: {e}"))
    }

    /// Replace the unit step cost with `cost_fn`.
    #[must_use]
    pub fn with_cost_fn(
        mut self,
        cost_fn: impl Fn(Position) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.cost_fn = Some(Box::new(cost_fn));
        self
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.walls.len()
    }

    /// Whether `pos` is a wall or outside the grid.
    #[must_use]
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.walls
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(true)
    }

    fn step_cost(&self, pos: Position) -> f64 {
        self.cost_fn.as_ref().map_or(1.0, |f| f(pos))
    }

    fn open_neighbour(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|next| !self.is_blocked(*next))
    }
}

impl SearchProblem for Maze {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let next = self.open_neighbour(*state, direction)?;
                Some(Successor::new(next, direction, self.step_cost(next)))
            })
            .collect()
    }

    fn action_sequence_cost(&self, actions: &[Direction]) -> Option<f64> {
        let mut pos = self.start;
        let mut total = 0.0;
        for &direction in actions {
            pos = self.open_neighbour(pos, direction)?;
            total += self.step_cost(pos);
        }
        Some(total)
    }
}

/// Manhattan distance to the nearest goal. Admissible and consistent for
/// unit step costs.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn manhattan_heuristic(state: &Position, maze: &Maze) -> f64 {
    maze.goals
        .iter()
        .map(|goal| state.manhattan_distance(*goal))
        .min()
        .map_or(0.0, |d| d as f64)
}

/// Straight-line distance to the nearest goal. Admissible for unit step
/// costs, and never larger than [`manhattan_heuristic`].
#[must_use]
pub fn euclidean_heuristic(state: &Position, maze: &Maze) -> f64 {
    maze.goals
        .iter()
        .map(|goal| state.euclidean_distance(*goal))
        .min_by(f64::total_cmp)
        .unwrap_or(0.0)
}

/// Step cost that makes eastern cells cheap: `0.5^col`.
#[must_use]
pub fn stay_east_cost(pos: Position) -> f64 {
    0.5_f64.powi(i32::try_from(pos.col).unwrap_or(i32::MAX))
}

/// Step cost that makes western cells cheap: `2^col`.
#[must_use]
pub fn stay_west_cost(pos: Position) -> f64 {
    2.0_f64.powi(i32::try_from(pos.col).unwrap_or(i32::MAX))
}

/// The known solution of [`TINY_MAZE`].
#[must_use]
pub fn tiny_maze_plan() -> Vec<Direction> {
    use Direction::{South as S, West as W};
    vec![S, S, W, S, W, W, S, W]
}
