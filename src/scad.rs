//! OpenSCAD output
//!
//! The model is laid out in doubled cell coordinates (see [crate::walls])
//! and scaled to the requested physical size in a single `scale()`.

use std::io::{self, Write};

use log::warn;

use crate::walls::{extract_walls, Segment};
use crate::Maze;

/// Physical size of the printed maze, in millimeters
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    /// Extent along the columns
    pub width: f64,
    /// Extent along the rows
    pub length: f64,
    /// Total height, floor included
    pub height: f64,
    pub floor_thickness: f64,
    pub wall_thickness: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 30.0,
            length: 30.0,
            height: 5.0,
            floor_thickness: 1.0,
            wall_thickness: 0.4,
        }
    }
}

impl Dimensions {
    /// Whether walls fit in cells of the given grid
    ///
    /// Walls thicker than half the smallest cell side leave no room for a
    /// passage. Logs a warning and returns false in that case.
    pub fn check_wall_thickness(&self, rows: usize, columns: usize) -> bool {
        let cell = (self.width / columns as f64).min(self.length / rows as f64);
        if self.wall_thickness > 0.5 * cell {
            warn!(
                "Wall thickness {} mm exceeds half the minimum cell dimension {} mm; \
                 consider using a smaller wall thickness",
                self.wall_thickness, cell
            );
            return false;
        }
        true
    }
}

/// Write OpenSCAD program for the maze
///
/// The program defines `wall_vert` and `wall_horz` modules, then places a
/// floor slab and one wall per standing segment.
pub fn write_scad<W: Write>(maze: &Maze, dims: &Dimensions, out: &mut W) -> io::Result<()> {
    let (w, h) = (maze.grid().width(), maze.grid().height());

    writeln!(out, "// {} x {} maze", w, h)?;
    writeln!(out, "fudge  = 0.01;")?;
    writeln!(out, "width  = {:?};", dims.width)?;
    writeln!(out, "length = {:?};", dims.length)?;
    writeln!(out, "height = {:?};", dims.height)?;
    writeln!(out, "floor_thickness = {:?};", dims.floor_thickness)?;
    writeln!(out, "wall_thickness  = {:?};", dims.wall_thickness)?;
    writeln!(out, "wall_height     = height - floor_thickness;")?;
    writeln!(out)?;
    writeln!(out, "module wall_vert(x, y1, y2)")?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "     translate([x, y1, floor_thickness - fudge]) \
         cube([wall_thickness, (y2 - y1) + wall_thickness, wall_height + fudge], center=false);"
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "module wall_horz(x1, x2, y)")?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "     translate([x1, y, floor_thickness - fudge]) \
         cube([(x2 - x1) + wall_thickness, wall_thickness, wall_height + fudge], center=false);"
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(
        out,
        "translate([-width / 2, -length / 2, 0]) \
         scale([width / (wall_thickness + 2 * {w}), length / (wall_thickness + 2 * {h}), 1]) union()"
    )?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "     cube([wall_thickness + 2 * {w}, wall_thickness + 2 * {h}, floor_thickness], center=false);"
    )?;

    for segment in extract_walls(maze.grid()) {
        match segment {
            Segment::Vertical { x, y1, y2 } => {
                writeln!(out, "     wall_vert({x}, {y1}, {y2});")?
            }
            Segment::Horizontal { x1, x2, y } => {
                writeln!(out, "     wall_horz({x1}, {x2}, {y});")?
            }
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}
