//! CLI for maze generation

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use log::info;
use scad_maze::{
    maze_generator::MazeGenerator,
    scad::{write_scad, Dimensions},
};

/// Perfect maze as an OpenSCAD model, ready for 3D printing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of maze rows running the maze length
    #[arg(short, long, default_value_t = 8)]
    rows: usize,

    /// Number of maze columns running the maze width
    #[arg(short, long, default_value_t = 8)]
    columns: usize,

    /// Physical length of the maze, millimeters
    #[arg(short, long, default_value_t = 30.0)]
    length: f64,

    /// Physical width of the maze, millimeters
    #[arg(short, long, default_value_t = 30.0)]
    width: f64,

    /// Physical height of the maze, millimeters
    #[arg(short = 'H', long, default_value_t = 5.0)]
    height: f64,

    /// Physical thickness of the maze floor, millimeters
    #[arg(short, long, default_value_t = 1.0)]
    floor: f64,

    /// Physical wall thickness, millimeters
    #[arg(short, long, default_value_t = 0.4)]
    thickness: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the maze and its solution on the terminal
    #[arg(short, long)]
    preview: bool,

    /// File, where to write the model. Use `-` for stdout.
    output: Option<PathBuf>,
}

/// Generate maze, write OpenSCAD program
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "Generating {} x {} maze with seed {}",
        args.columns, args.rows, seed
    );

    let dims = Dimensions {
        width: args.width,
        length: args.length,
        height: args.height,
        floor_thickness: args.floor,
        wall_thickness: args.thickness,
    };

    let mut gen = MazeGenerator::new(Some(seed));
    let maze = gen.generate_maze(args.rows, args.columns)?;
    dims.check_wall_thickness(args.rows, args.columns);

    if args.preview {
        eprintln!("{}", maze.emoji_string());
    }

    match args.output.filter(|path| path.to_str() != Some("-")) {
        Some(path) => {
            info!("Writing model to {}", path.display());
            let file = File::create(&path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_scad(&maze, &dims, &mut out)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            write_scad(&maze, &dims, &mut out)?;
        }
    }
    Ok(())
}
