//! Route finding over a carved grid.
//!
//! The wall-free adjacencies of a perfect maze form a spanning tree, so
//! exactly one route joins the entrance to the exit and a depth-first walk
//! with a visited guard is all the search that is needed.

use bit_set::BitSet;

use crate::cells::{Cartesian2DCoordinate, WALK_ORDER};
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

#[derive(Debug, Copy, Clone)]
struct Frame {
    coord: Cartesian2DCoordinate,
    next_direction: usize,
}

/// Finds the route from the entrance (top-left cell) to the exit
/// (bottom-right cell) by backtracking search, and returns it as the
/// sequence of cell coordinates walked, entrance and exit included.
///
/// Cells are marked visited as the walk reaches them; a dead end stays
/// marked when the walk retreats, which is what stops the search from
/// circling. The visited flags left over from generation are cleared
/// before the walk starts, so solving is repeatable on the same grid.
///
/// Each tentative move is reported to any attached sink as it is drawn,
/// and reported again as an undo when the move turns out to be a dead end.
///
/// Returns None when no route exists, e.g. when the grid has not been
/// carved at all - there is no misleading partial path to hand back.
/// The trail lives on an explicit frame stack, not the host call stack,
/// and each cell is entered at most once, so the walk is O(cell count)
/// with exploration order identical to the recursive formulation.
pub fn solve_maze(grid: &mut Grid) -> Option<Vec<Cartesian2DCoordinate>> {
    let RowsCount(rows) = grid.rows();
    let ColumnsCount(columns) = grid.columns();
    let entrance = Cartesian2DCoordinate::new(0, 0);
    let exit = Cartesian2DCoordinate::new(columns as u32 - 1, rows as u32 - 1);

    grid.reset_visited();
    let sink = grid.render_sink().clone();

    grid.mark_visited(entrance).expect("the entrance is always inside the grid");
    let mut frames = vec![Frame {
        coord: entrance,
        next_direction: 0,
    }];

    while let Some(top) = frames.last().copied() {

        if top.coord == exit {
            return Some(frames.iter().map(|frame| frame.coord).collect());
        }

        // Resume probing where this frame left off before it descended.
        let mut advance = None;
        let mut direction_index = top.next_direction;
        while direction_index < WALK_ORDER.len() {
            let dir = WALK_ORDER[direction_index];
            direction_index += 1;

            if let Some(neighbour) = grid.neighbour_at_direction(top.coord, dir) {
                if !grid.is_visited(neighbour) && grid.is_linked(top.coord, neighbour) {
                    advance = Some((neighbour, direction_index));
                    break;
                }
            }
        }

        match advance {
            Some((next, resume_at)) => {
                frames.last_mut().expect("the frame stack is not empty").next_direction =
                    resume_at;
                if let Some(ref s) = sink {
                    s.on_move_drawn(top.coord, next, false);
                }
                grid.mark_visited(next).expect("neighbours of grid cells are inside the grid");
                frames.push(Frame {
                    coord: next,
                    next_direction: 0,
                });
            }
            None => {
                // Dead end: retract the move that got us here. The cell
                // stays visited so the walk never comes back.
                frames.pop();
                if let Some(parent) = frames.last() {
                    if let Some(ref s) = sink {
                        s.on_move_drawn(top.coord, parent.coord, true);
                    }
                }
            }
        }
    }

    None
}

/// The number of cells reachable from `start` through wall-free
/// adjacencies, the flood fill used to check a carved grid really spans
/// every cell. Boundary openings lead outside and are not followed.
pub fn reachable_cell_count(grid: &Grid, start: Cartesian2DCoordinate) -> usize {
    let start_index = match grid.grid_coordinate_to_index(start) {
        Some(index) => index,
        None => return 0,
    };

    let mut seen = BitSet::with_capacity(grid.size().0);
    seen.insert(start_index);

    let mut frontier = vec![start];
    while let Some(coord) = frontier.pop() {
        for &dir in &WALK_ORDER {
            if let Some(neighbour) = grid.neighbour_at_direction(coord, dir) {
                if grid.is_linked(coord, neighbour) {
                    let neighbour_index = grid.grid_coordinate_to_index(neighbour)
                                              .expect("neighbours of grid cells are inside the \
                                                       grid");
                    if seen.insert(neighbour_index) {
                        frontier.push(neighbour);
                    }
                }
            }
        }
    }

    seen.len()
}

#[cfg(test)]
mod tests {

    use fnv::FnvHashSet;
    use std::rc::Rc;

    use super::*;
    use crate::generators::{self, GenerationStrategy};
    use crate::renderers::{SinkEvent, SinkEventLog};
    use crate::units::{ColumnsCount, RowsCount};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn generated_grid(rows: usize, columns: usize, seed: u64, strategy: GenerationStrategy) -> Grid {
        let mut g = Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("invalid dimensions");
        generators::generate_maze(&mut g, strategy, &mut generators::seeded_rng(seed))
            .expect("generation failed");
        g
    }

    #[test]
    fn solves_generated_mazes() {
        for &strategy in &[GenerationStrategy::RecursiveBacktracker, GenerationStrategy::Kruskal] {
            for seed in 0..5 {
                let mut g = generated_grid(9, 6, seed, strategy);
                let path = solve_maze(&mut g).expect("a perfect maze always has a route");

                assert_eq!(*path.first().unwrap(), gc(0, 0));
                assert_eq!(*path.last().unwrap(), gc(5, 8));

                // every step of the route goes through an open wall
                for pair in path.windows(2) {
                    assert!(g.is_linked(pair[0], pair[1]));
                }

                // the route never visits a cell twice
                let distinct: FnvHashSet<_> = path.iter().collect();
                assert_eq!(distinct.len(), path.len());
            }
        }
    }

    #[test]
    fn solving_is_repeatable() {
        let mut g = generated_grid(8, 8, 11, GenerationStrategy::RecursiveBacktracker);
        let first = solve_maze(&mut g).expect("first solve failed");
        let second = solve_maze(&mut g).expect("second solve failed");
        // one route exists in a perfect maze, so re-solving finds the same one
        assert_eq!(first, second);
    }

    #[test]
    fn uncarved_grid_has_no_route() {
        let mut g = Grid::new(RowsCount(2), ColumnsCount(2)).unwrap();
        assert_eq!(solve_maze(&mut g), None);
    }

    #[test]
    fn single_cell_grid_is_trivially_solved() {
        let mut g = Grid::new(RowsCount(1), ColumnsCount(1)).unwrap();
        assert_eq!(solve_maze(&mut g), Some(vec![gc(0, 0)]));
    }

    #[test]
    fn drawn_moves_balance_with_undos_and_path_length() {
        let mut g = generated_grid(10, 10, 99, GenerationStrategy::Kruskal);
        let log = Rc::new(SinkEventLog::new());
        g.set_render_sink(Some(log.clone()));

        let path = solve_maze(&mut g).expect("solve failed");

        let mut drawn = 0;
        let mut undone = 0;
        for event in log.snapshot() {
            if let SinkEvent::MoveDrawn { is_undo, .. } = event {
                if is_undo {
                    undone += 1;
                } else {
                    drawn += 1;
                }
            }
        }
        // moves still on the board at the end are exactly the route edges
        assert_eq!(drawn - undone, path.len() - 1);
    }

    #[test]
    fn flood_fill_counts_reachable_cells() {
        let mut g = Grid::new(RowsCount(3), ColumnsCount(3)).unwrap();
        assert_eq!(reachable_cell_count(&g, gc(0, 0)), 1);

        g.remove_wall_between(gc(0, 0), gc(1, 0), crate::cells::CompassPrimary::East).unwrap();
        g.remove_wall_between(gc(1, 0), gc(1, 1), crate::cells::CompassPrimary::South).unwrap();
        assert_eq!(reachable_cell_count(&g, gc(0, 0)), 3);
        assert_eq!(reachable_cell_count(&g, gc(2, 2)), 1);

        assert_eq!(reachable_cell_count(&g, gc(9, 9)), 0);

        let generated = generated_grid(7, 7, 4, GenerationStrategy::RecursiveBacktracker);
        assert_eq!(reachable_cell_count(&generated, gc(0, 0)), 49);
    }
}
