//! Maze generation

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{Direction, Grid};
use crate::{Maze, MazeError, Point};

/// Perfect maze generator (randomized depth-first search).
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

/// Cell on the traversal stack, with the directions still to try
struct Frame {
    depth: usize,
    pos: Point,
    directions: [Direction; 4],
    next: usize,
}

/// Path from the start cell, frozen once the finish cell is reached
struct Trail {
    finish: Point,
    path: Vec<Point>,
    solved_depth: Option<usize>,
}

impl Trail {
    fn record(&mut self, depth: usize, pos: Point) {
        if self.solved_depth.is_some() {
            return;
        }
        self.path.truncate(depth);
        self.path.push(pos);
        if pos == self.finish {
            self.solved_depth = Some(depth);
        }
    }
}

impl MazeGenerator<StdRng> {
    /// Create generator, seeded from `seed` or from system entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Create generator drawing from an arbitrary random source
    pub fn with_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate a perfect maze of `height` rows and `width` columns
    ///
    /// The entry is a gap in the north wall of a random cell on the top row,
    /// the exit a gap in the south wall of a random cell on the bottom row.
    ///
    /// Returns error, if either dimension is zero.
    pub fn generate_maze(&mut self, height: usize, width: usize) -> Result<Maze, MazeError> {
        let mut grid = Grid::new(width, height)?;

        let start = Point {
            x: self.random.gen_range(0..width),
            y: 0,
        };
        let finish = Point {
            x: self.random.gen_range(0..width),
            y: height - 1,
        };

        let solution = self.build_maze(&mut grid, start, finish);

        // Borders are the only thing keeping the traversal inside the grid,
        // so the gaps are opened only after it has finished.
        grid.remove_border(start.x, start.y, Direction::North);
        grid.remove_wall(start.x, start.y, Direction::North);
        grid.remove_border(finish.x, finish.y, Direction::South);
        grid.remove_wall(finish.x, finish.y, Direction::South);

        Ok(Maze::new(grid, start, finish, solution))
    }

    /// Carve passages from `start` until every cell is visited
    ///
    /// From the current cell, try the four directions in random order.
    /// Step into any neighbor that is not behind a border and not yet
    /// visited, removing the wall between the two. Walking back happens
    /// once all directions of a cell are exhausted.
    ///
    /// Returns the stack of cells at the moment `finish` was first reached.
    fn build_maze(&mut self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        let mut trail = Trail {
            finish,
            path: Vec::new(),
            solved_depth: None,
        };
        let mut stack = vec![self.enter_cell(grid, &mut trail, 0, start)];
        let mut max_depth = 0;

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.directions.len() {
                stack.pop();
                continue;
            }
            let dir = frame.directions[frame.next];
            frame.next += 1;
            let (pos, depth) = (frame.pos, frame.depth);

            if grid.has_border(pos.x, pos.y, dir) {
                continue;
            }
            let (nx, ny) = grid.neighbor(pos.x, pos.y, dir);
            if grid.is_visited(nx, ny) {
                continue;
            }

            grid.remove_wall(pos.x, pos.y, dir);
            grid.remove_wall(nx, ny, dir.opposite());

            let next = self.enter_cell(grid, &mut trail, depth + 1, Point { x: nx, y: ny });
            stack.push(next);
            max_depth = max_depth.max(depth + 1);
        }

        debug!(
            "Carved {}x{} maze: solution depth {:?}, max stack depth {}",
            grid.width(),
            grid.height(),
            trail.solved_depth,
            max_depth
        );
        trail.path
    }

    fn enter_cell(
        &mut self,
        grid: &mut Grid,
        trail: &mut Trail,
        depth: usize,
        pos: Point,
    ) -> Frame {
        grid.visit(pos.x, pos.y);
        trail.record(depth, pos);

        // The shuffle is the only source of variety in the layout
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.random);

        Frame {
            depth,
            pos,
            directions,
            next: 0,
        }
    }
}
