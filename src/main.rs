use docopt::Docopt;
use mazer::{
    cells::CoordinateSmallVec,
    generators::{self, GenerationStrategy},
    grid::Grid,
    pathing,
    renderers::{GridDisplay, PathDisplay, StartEndPointsDisplay},
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    rc::Rc
};

const USAGE: &str = "Mazer

Usage:
    mazer_driver -h | --help
    mazer_driver (backtracker|kruskal) [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--solve [--mark-start-end]] [--text-out=<path>]

Options:
    -h --help           Show this screen.
    --grid-size=<n>     The grid size is n * n.
    --grid-width=<w>    The grid width in a w*h grid [default: 20].
    --grid-height=<h>   The grid height in a w*h grid [default: 20].
    --seed=<s>          Seed for the wall carving; the same seed always carves the same maze.
    --solve             Walk the maze from entrance to exit and mark the route in the rendering.
    --mark-start-end    Draw only an 'S' (entrance) and 'E' (exit) instead of the whole route.
    --text-out=<path>   Output file path for the textual rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct MazerArgs {
    cmd_backtracker: bool,
    cmd_kruskal: bool,
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_solve: bool,
    flag_mark_start_end: bool,
    flag_text_out: String,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Engine(::mazer::errors::Error, ::mazer::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazerArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut maze_grid = Grid::new(RowsCount(height), ColumnsCount(width))
        .chain_err(|| format!("Cannot build a {} x {} grid", width, height))?;

    let mut rng = match args.flag_seed {
        Some(seed) => generators::seeded_rng(seed),
        None => XorShiftRng::from_entropy(),
    };
    let strategy = if args.cmd_kruskal {
        GenerationStrategy::Kruskal
    } else {
        GenerationStrategy::RecursiveBacktracker
    };

    generators::generate_maze(&mut maze_grid, strategy, &mut rng)
        .chain_err(|| "Maze generation failed")?;

    if args.flag_solve {
        let path = pathing::solve_maze(&mut maze_grid)
            .ok_or("The maze has no route from entrance to exit")?;

        if args.flag_mark_start_end {
            let starts: CoordinateSmallVec = path.first().into_iter().cloned().collect();
            let ends: CoordinateSmallVec = path.last().into_iter().cloned().collect();
            let display = Rc::new(StartEndPointsDisplay::new(starts, ends));
            maze_grid.set_grid_display(Some(display as Rc<dyn GridDisplay>));
        } else {
            let display = Rc::new(PathDisplay::new(&path));
            maze_grid.set_grid_display(Some(display as Rc<dyn GridDisplay>));
        }
    }

    if args.flag_text_out.is_empty() {
        println!("{}", maze_grid);
    } else {
        write_text_to_file(&format!("{}", maze_grid), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
