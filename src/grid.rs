//! Cell grid with wall, border and visitation state

use log::debug;

use crate::MazeError;

/// Compass direction of a cell wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order the generator shuffles them from
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Direction of the same edge, seen from the neighboring cell
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    fn bit(self) -> u16 {
        match self {
            Direction::North => 0x1,
            Direction::East => 0x2,
            Direction::South => 0x4,
            Direction::West => 0x8,
        }
    }
}

/// Packed state of a single cell
///
/// ```text
///  Visited     Border      Walls
///        x    W S E N    W S E N
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell(u16);

impl Cell {
    const VISITED: u16 = 0x100;
    const BORDER_SHIFT: u16 = 4;
    const ALL_WALLS: u16 = 0xf;

    fn walled() -> Self {
        Cell(Self::ALL_WALLS)
    }

    fn border_bit(dir: Direction) -> u16 {
        dir.bit() << Self::BORDER_SHIFT
    }
}

/// Rectangular grid of cells, stored row-major
///
/// Every cell starts with all four walls standing; the outer perimeter
/// additionally carries border bits, which the generator never crosses.
/// Accessors do not check bounds beyond the slice indexing itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid with borders on the perimeter
    ///
    /// Returns error if either dimension is zero, or if the cells do not
    /// fit in memory.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let too_large = MazeError::TooLarge { width, height };
        let size = width.checked_mul(height).ok_or_else(|| too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large)?;
        cells.resize(size, Cell::walled());

        let mut grid = Grid {
            width,
            height,
            cells,
        };

        for x in 0..width {
            grid.set_border(x, 0, Direction::North);
            grid.set_border(x, height - 1, Direction::South);
        }
        for y in 0..height {
            grid.set_border(0, y, Direction::West);
            grid.set_border(width - 1, y, Direction::East);
        }

        debug!("Allocated {}x{} grid", width, height);
        Ok(grid)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    fn set_border(&mut self, x: usize, y: usize, dir: Direction) {
        self.cell_mut(x, y).0 |= Cell::border_bit(dir);
    }

    /// Mark cell as visited
    pub fn visit(&mut self, x: usize, y: usize) {
        self.cell_mut(x, y).0 |= Cell::VISITED;
    }

    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).0 & Cell::VISITED != 0
    }

    /// Whether the wall in direction `dir` is still standing
    pub fn has_wall(&self, x: usize, y: usize, dir: Direction) -> bool {
        self.cell(x, y).0 & dir.bit() != 0
    }

    /// Knock down one side of a wall. The neighbor keeps its side.
    pub fn remove_wall(&mut self, x: usize, y: usize, dir: Direction) {
        self.cell_mut(x, y).0 &= !dir.bit();
    }

    /// Whether the wall in direction `dir` is part of the maze boundary
    pub fn has_border(&self, x: usize, y: usize, dir: Direction) -> bool {
        self.cell(x, y).0 & Cell::border_bit(dir) != 0
    }

    pub fn remove_border(&mut self, x: usize, y: usize, dir: Direction) {
        self.cell_mut(x, y).0 &= !Cell::border_bit(dir);
    }

    /// Coordinates of the neighbor in direction `dir`
    ///
    /// Columns wrap around, rows do not. The caller must not step through
    /// a border: North of row 0 or South of the last row is out of range.
    ///
    /// # Panics
    /// Panics in debug builds when stepping North from row 0. Stepping
    /// South from the last row yields a row that the other accessors
    /// reject by panicking.
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> (usize, usize) {
        match dir {
            Direction::North => (x, y - 1),
            Direction::South => (x, y + 1),
            Direction::East => ((x + 1) % self.width, y),
            Direction::West => ((x + self.width - 1) % self.width, y),
        }
    }

    /// Number of visited cells
    pub fn visited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.0 & Cell::VISITED != 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Grid};
    use crate::MazeError;

    #[test]
    fn reject_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn reject_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(MazeError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn reject_unallocatable_dimensions() {
        assert_eq!(
            Grid::new(1 << 62, 2),
            Err(MazeError::TooLarge {
                width: 1 << 62,
                height: 2
            })
        );
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert!(!grid.is_visited(x, y));
                for dir in Direction::ALL {
                    assert!(grid.has_wall(x, y, dir));
                }
            }
        }
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn borders_only_on_perimeter() {
        let (w, h) = (4, 3);
        let grid = Grid::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                assert_eq!(grid.has_border(x, y, Direction::North), y == 0);
                assert_eq!(grid.has_border(x, y, Direction::South), y == h - 1);
                assert_eq!(grid.has_border(x, y, Direction::West), x == 0);
                assert_eq!(grid.has_border(x, y, Direction::East), x == w - 1);
            }
        }
    }

    #[test]
    fn single_cell_is_bordered_on_all_sides() {
        let grid = Grid::new(1, 1).unwrap();
        for dir in Direction::ALL {
            assert!(grid.has_border(0, 0, dir));
        }
    }

    #[test]
    fn visit_is_idempotent() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.visit(1, 0);
        grid.visit(1, 0);
        assert!(grid.is_visited(1, 0));
        assert!(!grid.is_visited(0, 1));
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn remove_wall_touches_one_side_only() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(1, 1, Direction::East);
        assert!(!grid.has_wall(1, 1, Direction::East));
        assert!(grid.has_wall(2, 1, Direction::West));
        assert!(grid.has_wall(1, 1, Direction::North));

        // Already clear
        grid.remove_wall(1, 1, Direction::East);
        assert!(!grid.has_wall(1, 1, Direction::East));
    }

    #[test]
    fn remove_border_keeps_wall() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_border(1, 0, Direction::North);
        assert!(!grid.has_border(1, 0, Direction::North));
        assert!(grid.has_wall(1, 0, Direction::North));
        assert!(grid.has_border(0, 0, Direction::North));
    }

    #[test]
    fn neighbors_wrap_horizontally() {
        let grid = Grid::new(5, 3).unwrap();
        assert_eq!(grid.neighbor(4, 1, Direction::East), (0, 1));
        assert_eq!(grid.neighbor(0, 1, Direction::West), (4, 1));
        assert_eq!(grid.neighbor(2, 1, Direction::East), (3, 1));
        assert_eq!(grid.neighbor(2, 1, Direction::West), (1, 1));
        assert_eq!(grid.neighbor(2, 1, Direction::North), (2, 0));
        assert_eq!(grid.neighbor(2, 1, Direction::South), (2, 2));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn neighbor_north_of_top_row_panics() {
        let grid = Grid::new(3, 3).unwrap();
        grid.neighbor(1, 0, Direction::North);
    }

    #[test]
    fn wrap_seam_is_bordered_on_both_sides() {
        let grid = Grid::new(5, 3).unwrap();
        for y in 0..3 {
            assert!(grid.has_border(4, y, Direction::East));
            assert!(grid.has_border(0, y, Direction::West));
        }
    }

    #[test]
    fn opposite_directions() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }
}
