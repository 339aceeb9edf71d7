use error_chain::bail;
use std::fmt;
use std::rc::Rc;

use crate::cells::{Cartesian2DCoordinate, CellKind, CompassPrimary, CoordinateSmallVec, GridCell,
                   WALK_ORDER};
use crate::errors::{ErrorKind, Result};
use crate::renderers::{GridDisplay, RenderSink};
use crate::units::{CellsCount, ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// A rectangular grid of walled cells.
///
/// The grid owns every cell and is the only mutator of wall state, which
/// keeps the invariant that an internal wall is present on both of its
/// cells or on neither. `visited` flags and terrain kinds also change only
/// through the grid so an attached `RenderSink` hears about every change.
pub struct Grid {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<GridCell>,
    render_sink: Option<Rc<dyn RenderSink>>,
    grid_display: Option<Rc<dyn GridDisplay>>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: rows: {:?}, columns: {:?}, links: {:?}",
               self.rows,
               self.columns,
               self.links_count())
    }
}

impl Grid {
    /// A grid of `rows` x `columns` fully walled, unvisited cells.
    /// Dimensions are fixed for the lifetime of the grid; zero in either
    /// dimension is an invalid argument.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let (RowsCount(row_count), ColumnsCount(column_count)) = (rows, columns);
        if row_count == 0 || column_count == 0 {
            bail!(ErrorKind::InvalidArgument(format!("grid dimensions must be greater than \
                                                      zero, got {} x {}",
                                                     row_count,
                                                     column_count)));
        }

        Ok(Grid {
            rows,
            columns,
            cells: vec![GridCell::new(); row_count * column_count],
            render_sink: None,
            grid_display: None,
        })
    }

    #[inline]
    pub fn set_render_sink(&mut self, render_sink: Option<Rc<dyn RenderSink>>) {
        self.render_sink = render_sink;
    }

    #[inline]
    pub fn render_sink(&self) -> &Option<Rc<dyn RenderSink>> {
        &self.render_sink
    }

    #[inline]
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid_display = grid_display;
    }

    #[inline]
    pub fn grid_display(&self) -> &Option<Rc<dyn GridDisplay>> {
        &self.grid_display
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.rows.0 * self.columns.0)
    }

    /// Convert a grid coordinate to a one dimensional index in the range
    /// 0...size. Returns None if the coordinate is outside the grid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.columns.0 + coord.x as usize)
        } else {
            None
        }
    }

    /// Is the grid coordinate within the grid's dimensions?
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.columns.0 && (coord.y as usize) < self.rows.0
    }

    #[inline]
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<&GridCell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// The adjacent coordinate in the given direction, or None when it
    /// would fall outside the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        coord.offset(direction)
             .and_then(|neighbour_coord| if self.is_valid_coordinate(neighbour_coord) {
                 Some(neighbour_coord)
             } else {
                 None
             })
    }

    /// Cell coordinates to the North, South, East or West of a particular
    /// cell, whether or not a wall separates them.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        [CompassPrimary::North, CompassPrimary::South, CompassPrimary::East, CompassPrimary::West]
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// Clears the matching wall pair between two adjacent cells.
    ///
    /// `b` must be the neighbour of `a` in `direction`; both sides of the
    /// shared wall are cleared in the same call so the pair invariant can
    /// never be observed broken.
    pub fn remove_wall_between(&mut self,
                               a: Cartesian2DCoordinate,
                               b: Cartesian2DCoordinate,
                               direction: CompassPrimary)
                               -> Result<()> {
        let a_index = self.require_valid_coordinate(a)?;
        let b_index = self.require_valid_coordinate(b)?;

        if self.neighbour_at_direction(a, direction) != Some(b) {
            bail!(ErrorKind::InvalidArgument(format!("cell ({}, {}) is not the {:?} neighbour \
                                                      of cell ({}, {})",
                                                     b.x,
                                                     b.y,
                                                     direction,
                                                     a.x,
                                                     a.y)));
        }

        self.cells[a_index].clear_wall(direction);
        self.cells[b_index].clear_wall(direction.opposite());

        if let Some(ref sink) = self.render_sink {
            sink.on_walls_changed(a);
            sink.on_walls_changed(b);
        }
        Ok(())
    }

    /// Clears a single wall with no matching neighbour - an opening to the
    /// outside of the grid, used for the entrance and exit only.
    pub fn open_boundary(&mut self,
                         coord: Cartesian2DCoordinate,
                         side: CompassPrimary)
                         -> Result<()> {
        let index = self.require_valid_coordinate(coord)?;
        self.cells[index].clear_wall(side);

        if let Some(ref sink) = self.render_sink {
            sink.on_walls_changed(coord);
        }
        Ok(())
    }

    /// Are two adjacent cells joined by a passage (no wall between them)?
    pub fn is_linked(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        WALK_ORDER.iter().any(|&dir| {
            self.neighbour_at_direction(a, dir) == Some(b) &&
            self.cell(a).map_or(false, |cell| !cell.has_wall(dir))
        })
    }

    /// Is there a passage from this cell in the given direction to another
    /// cell of the grid? Boundary openings do not count - they lead outside.
    pub fn is_neighbour_linked(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// The number of internal passages (wall pairs removed). Each passage
    /// is counted once however many cells share it.
    pub fn links_count(&self) -> usize {
        let mut count = 0;
        for coord in self.iter() {
            for &dir in &[CompassPrimary::East, CompassPrimary::South] {
                if self.is_neighbour_linked(coord, dir) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn mark_visited(&mut self, coord: Cartesian2DCoordinate) -> Result<()> {
        let index = self.require_valid_coordinate(coord)?;
        self.cells[index].set_visited(true);

        if let Some(ref sink) = self.render_sink {
            sink.on_visited_changed(coord);
        }
        Ok(())
    }

    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord).map_or(false, GridCell::is_visited)
    }

    /// Clears the visited flag of every cell. Idempotent; the walks that
    /// follow generation depend on starting from a clean slate.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    /// Tags a cell with a terrain kind. The kind travels with the cell;
    /// mapping it to a colour is left to whatever is rendering.
    pub fn set_kind(&mut self, coord: Cartesian2DCoordinate, kind: CellKind) -> Result<()> {
        let index = self.require_valid_coordinate(coord)?;
        self.cells[index].set_kind(kind);
        Ok(())
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            columns: self.columns,
            cells_count: self.size().0,
        }
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Row,
            current_index: 0,
            rows: self.rows,
            columns: self.columns,
        }
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Column,
            current_index: 0,
            rows: self.rows,
            columns: self.columns,
        }
    }

    fn require_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> Result<usize> {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => Ok(index),
            None => {
                let linear = coord.y as usize * self.columns.0 + coord.x as usize;
                bail!(ErrorKind::OutOfRange(linear, self.size().0))
            }
        }
    }

    #[inline]
    fn cell_at(&self, row: usize, column: usize) -> &GridCell {
        &self.cells[row * self.columns.0 + column]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let rows_count = self.rows.0;
        let columns_count = self.columns.0;

        // Wall segment between cell (row-1, col) and cell (row, col); the
        // edges of the grid fall back to the boundary wall of the one cell
        // that exists. The pair invariant makes either side authoritative.
        let horizontal_wall = |row: usize, col: usize| -> bool {
            if row == 0 {
                self.cell_at(0, col).has_wall(CompassPrimary::North)
            } else if row == rows_count {
                self.cell_at(rows_count - 1, col).has_wall(CompassPrimary::South)
            } else {
                self.cell_at(row, col).has_wall(CompassPrimary::North)
            }
        };
        // Wall segment between cell (row, col-1) and cell (row, col).
        let vertical_wall = |row: usize, col: usize| -> bool {
            if col == 0 {
                self.cell_at(row, 0).has_wall(CompassPrimary::West)
            } else if col == columns_count {
                self.cell_at(row, columns_count - 1).has_wall(CompassPrimary::East)
            } else {
                self.cell_at(row, col).has_wall(CompassPrimary::West)
            }
        };
        // A corner glyph shows an arm for each wall segment that meets it.
        let corner = |row: usize, col: usize| -> &'static str {
            let up = row > 0 && vertical_wall(row - 1, col);
            let down = row < rows_count && vertical_wall(row, col);
            let left = col > 0 && horizontal_wall(row, col - 1);
            let right = col < columns_count && horizontal_wall(row, col);

            match (left, right, up, down) {
                (true, true, true, true) => WALL_LRUD,
                (true, true, true, false) => WALL_LRU,
                (true, true, false, true) => WALL_LRD,
                (true, false, true, true) => WALL_LUD,
                (false, true, true, true) => WALL_RUD,
                (true, true, false, false) => WALL_LR,
                (false, false, true, true) => WALL_UD,
                (false, true, true, false) => WALL_RU,
                (true, false, false, true) => WALL_LD,
                (true, false, true, false) => WALL_LU,
                (false, true, false, true) => WALL_RD,
                (true, false, false, false) => WALL_L,
                (false, true, false, false) => WALL_R,
                (false, false, true, false) => WALL_U,
                (false, false, false, true) => WALL_D,
                (false, false, false, false) => " ",
            }
        };
        let render_cell_body = |coord: Cartesian2DCoordinate| -> String {
            if let Some(ref displayer) = self.grid_display {
                displayer.render_cell_body(coord)
            } else {
                String::from("   ")
            }
        };

        let mut output = String::new();
        for row in 0..=rows_count {

            for col in 0..columns_count {
                output.push_str(corner(row, col));
                output.push_str(if horizontal_wall(row, col) { WALL_LR_3 } else { "   " });
            }
            output.push_str(corner(row, columns_count));
            output.push('\n');

            if row < rows_count {
                for col in 0..columns_count {
                    output.push_str(if vertical_wall(row, col) { WALL_UD } else { " " });
                    let coord = Cartesian2DCoordinate::new(col as u32, row as u32);
                    output.push_str(&render_cell_body(coord));
                }
                output.push_str(if vertical_wall(row, columns_count) { WALL_UD } else { " " });
                output.push('\n');
            }
        }

        write!(f, "{}", output)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    columns: ColumnsCount,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        (lower_bound, Some(lower_bound))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}

#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl Iterator for BatchIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if let BatchIterType::Row = self.iter_type {
            if self.current_index < self.rows.0 {
                let coords = (0..self.columns.0)
                    .map(|i| {
                        Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(i),
                                                                       RowIndex(self.current_index))
                    })
                    .collect();
                self.current_index += 1;
                Some(coords)
            } else {
                None
            }
        } else if self.current_index < self.columns.0 {
            let coords = (0..self.rows.0)
                .map(|i| {
                    Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(self.current_index),
                                                                   RowIndex(i))
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools; // a trait
    use std::rc::Rc;
    use std::u32;

    use super::*;
    use crate::renderers::{SinkEvent, SinkEventLog};

    fn small_grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("grid dimensions are invalid")
    }

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(Grid::new(RowsCount(0), ColumnsCount(5)).is_err());
        assert!(Grid::new(RowsCount(5), ColumnsCount(0)).is_err());
        assert!(Grid::new(RowsCount(0), ColumnsCount(0)).is_err());
    }

    #[test]
    fn grid_has_exactly_rows_by_columns_cells() {
        let g = small_grid(15, 10);
        assert_eq!(g.size(), CellsCount(150));

        let grid_rows = g.iter_row().collect::<Vec<_>>();
        assert_eq!(grid_rows.len(), 15);
        for row in &grid_rows {
            assert_eq!(row.len(), 10);
        }
    }

    #[test]
    fn neighbour_cells() {
        let g = small_grid(10, 10);

        let check_expected_neighbours = |coord, expected_neighbours: &[Cartesian2DCoordinate]| {
            let found: Vec<Cartesian2DCoordinate> =
                g.neighbours(coord).iter().cloned().sorted().collect();
            let expected: Vec<Cartesian2DCoordinate> =
                expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(found, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // side element examples
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(0, 1), &[gc(0, 0), gc(0, 2), gc(1, 1)]);
        check_expected_neighbours(gc(0, 8), &[gc(1, 8), gc(0, 7), gc(0, 9)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        // Some place with 4 neighbours inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let g = small_grid(2, 2);
        let check_neighbour = |coord, dir: CompassPrimary, expected| {
            assert_eq!(g.neighbour_at_direction(coord, dir), expected);
        };
        check_neighbour(gc(0, 0), CompassPrimary::North, None);
        check_neighbour(gc(0, 0), CompassPrimary::South, Some(gc(0, 1)));
        check_neighbour(gc(0, 0), CompassPrimary::East, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), CompassPrimary::West, None);

        check_neighbour(gc(1, 1), CompassPrimary::North, Some(gc(1, 0)));
        check_neighbour(gc(1, 1), CompassPrimary::South, None);
        check_neighbour(gc(1, 1), CompassPrimary::East, None);
        check_neighbour(gc(1, 1), CompassPrimary::West, Some(gc(0, 1)));
    }

    #[test]
    fn grid_coordinate_as_index() {
        let g = small_grid(3, 3);
        let coords = &[gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1), gc(0, 2),
                       gc(1, 2), gc(2, 2)];
        let indices: Vec<Option<usize>> = coords.iter()
                                                .map(|coord| g.grid_coordinate_to_index(*coord))
                                                .collect();
        let expected = (0..9).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        assert_eq!(g.grid_coordinate_to_index(gc(2, 3)), None);
        assert_eq!(g.grid_coordinate_to_index(gc(3, 2)), None);
        assert_eq!(g.grid_coordinate_to_index(gc(u32::MAX, u32::MAX)), None);
    }

    #[test]
    fn removing_a_wall_clears_both_sides() {
        let mut g = small_grid(2, 2);
        let a = gc(0, 0);
        let b = gc(1, 0);

        assert!(!g.is_linked(a, b));
        g.remove_wall_between(a, b, CompassPrimary::East).expect("wall removal failed");

        assert!(!g.cell(a).unwrap().has_wall(CompassPrimary::East));
        assert!(!g.cell(b).unwrap().has_wall(CompassPrimary::West));
        assert!(g.is_linked(a, b));
        assert!(g.is_linked(b, a));

        // the other walls of both cells are untouched
        assert!(g.cell(a).unwrap().has_wall(CompassPrimary::North));
        assert!(g.cell(a).unwrap().has_wall(CompassPrimary::South));
        assert!(g.cell(b).unwrap().has_wall(CompassPrimary::East));
    }

    #[test]
    fn removing_a_wall_between_non_adjacent_cells_fails() {
        let mut g = small_grid(3, 3);
        assert!(g.remove_wall_between(gc(0, 0), gc(2, 0), CompassPrimary::East).is_err());
        assert!(g.remove_wall_between(gc(0, 0), gc(1, 1), CompassPrimary::South).is_err());
        // right neighbour, wrong direction
        assert!(g.remove_wall_between(gc(0, 0), gc(1, 0), CompassPrimary::West).is_err());
    }

    #[test]
    fn removing_a_wall_with_invalid_coordinates_fails() {
        let mut g = small_grid(2, 2);
        assert!(g.remove_wall_between(gc(5, 5), gc(6, 5), CompassPrimary::East).is_err());
        assert!(g.remove_wall_between(gc(1, 1), gc(2, 1), CompassPrimary::East).is_err());
    }

    #[test]
    fn boundary_openings_have_no_matching_side() {
        let mut g = small_grid(2, 2);
        g.open_boundary(gc(0, 0), CompassPrimary::North).expect("open boundary failed");
        g.open_boundary(gc(1, 1), CompassPrimary::South).expect("open boundary failed");

        assert!(!g.cell(gc(0, 0)).unwrap().has_wall(CompassPrimary::North));
        assert!(!g.cell(gc(1, 1)).unwrap().has_wall(CompassPrimary::South));
        // openings lead outside, they are not links between grid cells
        assert_eq!(g.links_count(), 0);

        assert!(g.open_boundary(gc(5, 0), CompassPrimary::North).is_err());
    }

    #[test]
    fn links_count_counts_each_passage_once() {
        let mut g = small_grid(2, 2);
        assert_eq!(g.links_count(), 0);
        g.remove_wall_between(gc(0, 0), gc(1, 0), CompassPrimary::East).unwrap();
        assert_eq!(g.links_count(), 1);
        g.remove_wall_between(gc(0, 0), gc(0, 1), CompassPrimary::South).unwrap();
        assert_eq!(g.links_count(), 2);
    }

    #[test]
    fn visited_flags() {
        let mut g = small_grid(3, 3);
        assert!(!g.is_visited(gc(1, 1)));

        g.mark_visited(gc(1, 1)).expect("mark visited failed");
        assert!(g.is_visited(gc(1, 1)));
        assert!(g.mark_visited(gc(9, 9)).is_err());

        g.reset_visited();
        assert!(g.iter().all(|coord| !g.is_visited(coord)));
        // idempotent
        g.reset_visited();
        assert!(g.iter().all(|coord| !g.is_visited(coord)));
    }

    #[test]
    fn terrain_kinds() {
        let mut g = small_grid(2, 2);
        assert_eq!(g.cell(gc(0, 1)).unwrap().kind(), CellKind::Open);

        g.set_kind(gc(0, 1), CellKind::Mud).expect("set kind failed");
        assert_eq!(g.cell(gc(0, 1)).unwrap().kind(), CellKind::Mud);
        assert_eq!(g.cell(gc(0, 1)).unwrap().traversal_cost(), 5);

        assert!(g.set_kind(gc(2, 2), CellKind::Sand).is_err());
    }

    #[test]
    fn cell_iter() {
        let g = small_grid(2, 2);
        assert_eq!(g.iter().collect::<Vec<Cartesian2DCoordinate>>(),
                   &[gc(0, 0), gc(1, 0), gc(0, 1), gc(1, 1)]);
    }

    #[test]
    fn row_iter() {
        let g = small_grid(2, 2);
        assert_eq!(g.iter_row().collect::<Vec<Vec<Cartesian2DCoordinate>>>(),
                   &[&[gc(0, 0), gc(1, 0)], &[gc(0, 1), gc(1, 1)]]);
    }

    #[test]
    fn column_iter() {
        let g = small_grid(2, 2);
        assert_eq!(g.iter_column().collect::<Vec<Vec<Cartesian2DCoordinate>>>(),
                   &[&[gc(0, 0), gc(0, 1)], &[gc(1, 0), gc(1, 1)]]);
    }

    #[test]
    fn sink_hears_wall_and_visited_changes() {
        let mut g = small_grid(2, 2);
        let log = Rc::new(SinkEventLog::new());
        g.set_render_sink(Some(log.clone()));

        g.remove_wall_between(gc(0, 0), gc(1, 0), CompassPrimary::East).unwrap();
        g.open_boundary(gc(0, 0), CompassPrimary::North).unwrap();
        g.mark_visited(gc(1, 1)).unwrap();

        assert_eq!(log.snapshot(),
                   vec![SinkEvent::WallsChanged(gc(0, 0)),
                        SinkEvent::WallsChanged(gc(1, 0)),
                        SinkEvent::WallsChanged(gc(0, 0)),
                        SinkEvent::VisitedChanged(gc(1, 1))]);
    }

    #[test]
    fn display_fully_walled_single_cell() {
        let g = small_grid(1, 1);
        assert_eq!(format!("{}", g), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn display_one_by_two_corridor_with_openings() {
        let mut g = small_grid(1, 2);
        g.remove_wall_between(gc(0, 0), gc(1, 0), CompassPrimary::East).unwrap();
        g.open_boundary(gc(0, 0), CompassPrimary::North).unwrap();
        g.open_boundary(gc(1, 0), CompassPrimary::South).unwrap();

        assert_eq!(format!("{}", g),
                   "╷   ╶───┐\n\
                    │       │\n\
                    └───╴   ╵\n");
    }
}
