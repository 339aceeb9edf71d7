use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, WALK_ORDER};
use crate::errors::Result;
use crate::grid::Grid;
use crate::union_find::DisjointSet;
use crate::units::{ColumnsCount, RowsCount};

/// How the spanning tree over the grid's cells gets carved. Both
/// strategies produce a perfect maze; they differ only in the order edges
/// are considered.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationStrategy {
    RecursiveBacktracker,
    Kruskal,
}

/// Carves a perfect maze into the grid with the chosen strategy, opens the
/// entrance (north wall of the top-left cell) and the exit (south wall of
/// the bottom-right cell), and clears the visited flags the carving left
/// behind so a solver starts from a clean slate.
pub fn generate_maze(grid: &mut Grid,
                     strategy: GenerationStrategy,
                     rng: &mut XorShiftRng)
                     -> Result<()> {
    match strategy {
        GenerationStrategy::RecursiveBacktracker => recursive_backtracker(grid, rng)?,
        GenerationStrategy::Kruskal => kruskal(grid, rng)?,
    }
    carve_entrance_and_exit(grid)?;
    grid.reset_visited();
    Ok(())
}

/// An rng for reproducible maze generation: the same seed on the same grid
/// dimensions always carves the same maze.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// Apply the recursive backtracker (randomized depth-first) maze
/// generation algorithm to a grid.
///
/// Starting from the top-left cell, repeatedly pick an unvisited neighbour
/// of the current cell at random, knock down the wall between them and
/// move there; when a cell has no unvisited neighbours the walk retreats
/// to the previous cell on the trail. Every cell is entered exactly once,
/// so the passages form a spanning tree: one wall fewer than there are
/// cells comes down and no cycle can appear.
///
/// The walk keeps its trail on an explicit stack rather than the host call
/// stack, so deep grids cannot overflow it; candidates are gathered in the
/// fixed probe order before the random pick, which keeps a seeded run
/// fully reproducible.
pub fn recursive_backtracker(grid: &mut Grid, rng: &mut XorShiftRng) -> Result<()> {
    let start = Cartesian2DCoordinate::new(0, 0);
    grid.mark_visited(start)?;

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {

        // The fringe: unvisited cells adjacent to the current one.
        let mut fringe: SmallVec<[(Cartesian2DCoordinate, CompassPrimary); 4]> = SmallVec::new();
        for &dir in &WALK_ORDER {
            if let Some(neighbour) = grid.neighbour_at_direction(current, dir) {
                if !grid.is_visited(neighbour) {
                    fringe.push((neighbour, dir));
                }
            }
        }

        if fringe.is_empty() {
            // Branch exhausted, retreat.
            stack.pop();
            continue;
        }

        let (next, dir) = fringe[rng.gen::<usize>() % fringe.len()];
        grid.remove_wall_between(current, next, dir)?;
        grid.mark_visited(next)?;
        stack.push(next);
    }

    Ok(())
}

/// Apply the Kruskal style edge-based maze generation algorithm to a grid.
///
/// Every internal wall is listed as the pair of cells it separates, the
/// list is shuffled, and walls are processed in that order: when the two
/// cells on either side are not yet connected in a disjoint set over the
/// cell indices, the wall comes down and their components merge. Walls
/// between already-connected cells stay up, which is exactly what keeps
/// cycles out. Once a single component remains every further wall would
/// close a cycle, so processing stops there.
pub fn kruskal(grid: &mut Grid, rng: &mut XorShiftRng) -> Result<()> {
    let RowsCount(rows) = grid.rows();
    let ColumnsCount(columns) = grid.columns();

    // Internal walls only: an east wall for every cell with a right-hand
    // neighbour, a south wall for every cell with one below. Built in
    // row-major order so a seeded shuffle is reproducible.
    let mut walls: Vec<(Cartesian2DCoordinate, Cartesian2DCoordinate, CompassPrimary)> =
        Vec::with_capacity(2 * rows * columns);
    for (row, col) in iproduct!(0..rows, 0..columns) {
        let coord = Cartesian2DCoordinate::new(col as u32, row as u32);
        if col + 1 < columns {
            walls.push((coord, Cartesian2DCoordinate::new(col as u32 + 1, row as u32),
                        CompassPrimary::East));
        }
        if row + 1 < rows {
            walls.push((coord, Cartesian2DCoordinate::new(col as u32, row as u32 + 1),
                        CompassPrimary::South));
        }
    }
    walls.shuffle(rng);

    let mut cell_sets = DisjointSet::new(rows * columns)?;
    for (a, b, dir) in walls {
        if cell_sets.component_count() == 1 {
            break;
        }

        let a_index = grid.grid_coordinate_to_index(a)
                          .expect("wall list coordinates lie inside the grid");
        let b_index = grid.grid_coordinate_to_index(b)
                          .expect("wall list coordinates lie inside the grid");

        if !cell_sets.connected(a_index, b_index)? {
            cell_sets.unify(a_index, b_index)?;
            grid.remove_wall_between(a, b, dir)?;
        }
    }

    Ok(())
}

/// Opens the maze to the outside: the entrance above the top-left cell and
/// the exit below the bottom-right cell.
pub fn carve_entrance_and_exit(grid: &mut Grid) -> Result<()> {
    let RowsCount(rows) = grid.rows();
    let ColumnsCount(columns) = grid.columns();

    grid.open_boundary(Cartesian2DCoordinate::new(0, 0), CompassPrimary::North)?;
    grid.open_boundary(Cartesian2DCoordinate::new(columns as u32 - 1, rows as u32 - 1),
                       CompassPrimary::South)?;
    Ok(())
}
