//! Wall extraction
//!
//! Each cell occupies a 2x2 square, so cell `(x, y)` spans `2x..=2x+2`
//! horizontally and `2y..=2y+2` vertically. Odd coordinates run through
//! cell centers, where a solution path may be drawn.

use crate::grid::{Direction, Grid};

/// Standing wall, in doubled cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Wall running from `(x, y1)` to `(x, y2)`
    Vertical { x: usize, y1: usize, y2: usize },
    /// Wall running from `(x1, y)` to `(x2, y)`
    Horizontal { x1: usize, x2: usize, y: usize },
}

impl Segment {
    fn of_cell(x: usize, y: usize, dir: Direction) -> Self {
        let (x, y) = (2 * x, 2 * y);
        match dir {
            Direction::North => Segment::Horizontal { x1: x, x2: x + 2, y },
            Direction::South => Segment::Horizontal {
                x1: x,
                x2: x + 2,
                y: y + 2,
            },
            Direction::West => Segment::Vertical { x, y1: y, y2: y + 2 },
            Direction::East => Segment::Vertical {
                x: x + 2,
                y1: y,
                y2: y + 2,
            },
        }
    }
}

/// List standing walls, each shared wall once
///
/// Walks the grid column by column from north to south. A column emits
/// the north wall of its top cell, then the west and south walls of every
/// cell; the last column also emits east walls.
pub fn extract_walls(grid: &Grid) -> Vec<Segment> {
    let (w, h) = (grid.width(), grid.height());
    let mut segments = Vec::new();
    let mut emit = |x: usize, y: usize, dir: Direction| {
        if grid.has_wall(x, y, dir) {
            segments.push(Segment::of_cell(x, y, dir));
        }
    };

    for x in 0..w {
        emit(x, 0, Direction::North);
        for y in 0..h {
            emit(x, y, Direction::West);
            emit(x, y, Direction::South);
            if x == w - 1 {
                emit(x, y, Direction::East);
            }
        }
    }
    segments
}
