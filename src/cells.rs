use smallvec::SmallVec;
use std::convert::From;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> Cartesian2DCoordinate {
        let ColumnsCount(width) = columns;
        let x = index % width;
        let y = index / width;
        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Self {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }

    /// Creates a new coordinate offset one cell away in the given direction.
    /// Returns None if the coordinate is not representable (u32 underflow);
    /// the grid still has to validate the upper bounds.
    pub fn offset(&self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => {
                if y > 0 {
                    Some(Cartesian2DCoordinate { x, y: y - 1 })
                } else {
                    None
                }
            }
            CompassPrimary::South => Some(Cartesian2DCoordinate { x, y: y + 1 }),
            CompassPrimary::East => Some(Cartesian2DCoordinate { x: x + 1, y }),
            CompassPrimary::West => {
                if x > 0 {
                    Some(Cartesian2DCoordinate { x: x - 1, y })
                } else {
                    None
                }
            }
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// The order in which the carving and solving walks probe neighbours.
/// Fixed (north, south, west, east) so that a seeded run always evaluates
/// candidates in the same sequence whatever the host iteration order.
pub const WALK_ORDER: [CompassPrimary; 4] = [
    CompassPrimary::North,
    CompassPrimary::South,
    CompassPrimary::West,
    CompassPrimary::East,
];

impl CompassPrimary {
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// Terrain tag carried by a cell. The kind decides the traversal cost; any
/// colouring is a rendering concern and lives outside the core.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellKind {
    Open,
    Sand,
    Mud,
}

impl CellKind {
    pub fn traversal_cost(self) -> u32 {
        match self {
            CellKind::Open => 1,
            CellKind::Sand => 2,
            CellKind::Mud => 5,
        }
    }
}

impl Default for CellKind {
    fn default() -> CellKind {
        CellKind::Open
    }
}

/// One cell of a rectangular maze grid.
///
/// Wall state is only ever mutated through the owning grid so that the two
/// sides of a shared wall stay in agreement.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridCell {
    north_wall: bool,
    south_wall: bool,
    east_wall: bool,
    west_wall: bool,
    visited: bool,
    kind: CellKind,
}

impl GridCell {
    /// A fully walled, unvisited cell.
    pub fn new() -> GridCell {
        GridCell {
            north_wall: true,
            south_wall: true,
            east_wall: true,
            west_wall: true,
            visited: false,
            kind: CellKind::Open,
        }
    }

    #[inline]
    pub fn has_wall(&self, side: CompassPrimary) -> bool {
        match side {
            CompassPrimary::North => self.north_wall,
            CompassPrimary::South => self.south_wall,
            CompassPrimary::East => self.east_wall,
            CompassPrimary::West => self.west_wall,
        }
    }

    pub(crate) fn clear_wall(&mut self, side: CompassPrimary) {
        match side {
            CompassPrimary::North => self.north_wall = false,
            CompassPrimary::South => self.south_wall = false,
            CompassPrimary::East => self.east_wall = false,
            CompassPrimary::West => self.west_wall = false,
        }
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    #[inline]
    pub fn traversal_cost(&self) -> u32 {
        self.kind.traversal_cost()
    }
}

impl Default for GridCell {
    fn default() -> GridCell {
        GridCell::new()
    }
}
