//! Generate perfect mazes and turn them into printable OpenSCAD models
//!
//! A maze is carved by a randomized depth-first search over a grid of
//! cells. Its standing walls are then extracted as line segments, which a
//! renderer such as [scad::write_scad] turns into solid geometry.
//!
//! # Examples
//! ## Generate a maze and list its walls
//! ```
//! use scad_maze::maze_generator::MazeGenerator;
//! use scad_maze::walls::{extract_walls, Segment};
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let maze = gen.generate_maze(4, 6).unwrap();
//!
//! // Perimeter minus the entry and exit, plus every interior wall left
//! // standing after carving
//! let walls = extract_walls(maze.grid());
//! assert_eq!(walls.len(), 4 * 6 + 4 + 6 - 1);
//! assert!(walls.contains(&Segment::Vertical { x: 0, y1: 0, y2: 2 }));
//!
//! // The solution leads from the entry on the top row to the exit below
//! assert_eq!(maze.solution().first(), Some(&maze.start()));
//! assert_eq!(maze.solution().last(), Some(&maze.finish()));
//! ```
//!
//! ## Write an OpenSCAD model
//! ```
//! use scad_maze::maze_generator::MazeGenerator;
//! use scad_maze::scad::{write_scad, Dimensions};
//!
//! let maze = MazeGenerator::new(Some(1)).generate_maze(3, 3).unwrap();
//! let mut out = Vec::new();
//! write_scad(&maze, &Dimensions::default(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("// 3 x 3 maze"));
//! ```

use itertools::Itertools;

use grid::{Direction, Grid};

mod error;
pub mod grid;
pub mod maze_generator;
pub mod scad;
pub mod walls;

pub use error::MazeError;

/// Cell location in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Finished maze, with its entry, exit and solution
#[derive(Debug, Clone)]
pub struct Maze {
    /// Carved grid; no longer modified
    grid: Grid,
    /// Cell on the top row whose north wall is open
    start: Point,
    /// Cell on the bottom row whose south wall is open
    finish: Point,
    /// Cells from `start` to `finish`, inclusive
    solution: Vec<Point>,
}

impl Maze {
    const S_START: char = '🏃';
    const S_GOAL: char = '❎';
    const S_VALID: char = '🟩';
    const S_WALL: char = '🟫';
    const S_PATH: char = '🟨';

    pub(crate) fn new(grid: Grid, start: Point, finish: Point, solution: Vec<Point>) -> Self {
        Self {
            grid,
            start,
            finish,
            solution,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    /// The unique path through the maze, as found during carving
    pub fn solution(&self) -> &[Point] {
        &self.solution
    }

    /// Render maze as emoji squares, with the solution highlighted
    ///
    /// Cells and the edges between them each take one square, so the result
    /// has `2 * height + 1` rows of `2 * width + 1` squares.
    pub fn to_emojis(&self) -> Vec<Vec<char>> {
        let (w, h) = (self.grid.width(), self.grid.height());
        let mut squares = vec![vec![Self::S_WALL; 2 * w + 1]; 2 * h + 1];

        for y in 0..h {
            for x in 0..w {
                let (row, col) = (2 * y + 1, 2 * x + 1);
                squares[row][col] = Self::S_VALID;
                if !self.grid.has_wall(x, y, Direction::North) {
                    squares[row - 1][col] = Self::S_VALID;
                }
                if !self.grid.has_wall(x, y, Direction::South) {
                    squares[row + 1][col] = Self::S_VALID;
                }
                if !self.grid.has_wall(x, y, Direction::West) {
                    squares[row][col - 1] = Self::S_VALID;
                }
                if !self.grid.has_wall(x, y, Direction::East) {
                    squares[row][col + 1] = Self::S_VALID;
                }
            }
        }

        for p in &self.solution {
            squares[2 * p.y + 1][2 * p.x + 1] = Self::S_PATH;
        }
        for (a, b) in self.solution.iter().tuple_windows() {
            // Steps across the wrap seam have no square in between
            if a.x.abs_diff(b.x) + a.y.abs_diff(b.y) == 1 {
                squares[a.y + b.y + 1][a.x + b.x + 1] = Self::S_PATH;
            }
        }

        squares[0][2 * self.start.x + 1] = Self::S_START;
        squares[2 * h][2 * self.finish.x + 1] = Self::S_GOAL;
        squares
    }

    /// Emoji rendering joined into printable lines
    pub fn emoji_string(&self) -> String {
        self.to_emojis()
            .iter()
            .map(|row| row.iter().join(""))
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::maze_generator::MazeGenerator;
    use crate::{Maze, Point};

    #[test]
    fn emoji_size_and_gaps() {
        let maze = MazeGenerator::new(Some(5)).generate_maze(4, 7).unwrap();
        let squares = maze.to_emojis();
        assert_eq!(squares.len(), 9);
        assert!(squares.iter().all(|row| row.len() == 15));

        assert_eq!(squares[0][2 * maze.start().x + 1], Maze::S_START);
        assert_eq!(squares[8][2 * maze.finish().x + 1], Maze::S_GOAL);

        // Corners never open
        for row in (0..9).step_by(2) {
            for col in (0..15).step_by(2) {
                assert_eq!(squares[row][col], Maze::S_WALL);
            }
        }
    }

    #[test]
    fn emoji_single_cell() {
        let maze = MazeGenerator::new(Some(0)).generate_maze(1, 1).unwrap();
        assert_eq!(maze.emoji_string(), "🟫🏃🟫\n🟫🟨🟫\n🟫❎🟫");
    }

    #[test]
    fn emoji_solution_is_continuous() {
        let maze = MazeGenerator::new(Some(11)).generate_maze(6, 6).unwrap();
        let squares = maze.to_emojis();
        let path_squares = squares
            .iter()
            .flatten()
            .filter(|&&c| c == Maze::S_PATH)
            .count();
        assert_eq!(path_squares, 2 * maze.solution().len() - 1);
        assert_eq!(maze.solution()[0], Point { x: maze.start().x, y: 0 });
    }
}
