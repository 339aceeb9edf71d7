//! Render boundary of the maze engine.
//!
//! The engine never draws pixels itself. Anything that wants to visualise
//! a maze plugs in here: a `RenderSink` is told about every state change
//! as it happens, and a `GridDisplay` decides what a cell body looks like
//! in the text rendering. Both are optional; the algorithms behave
//! identically with nothing attached.

use fnv::FnvHashSet;
use std::cell::RefCell;

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};

/// Notification target for grid mutations.
///
/// Methods are invoked synchronously at the point each change occurs.
/// Every method defaults to a no-op, so implementors override only what
/// they can draw. Pacing and animation delays belong to the implementor,
/// never to the engine.
pub trait RenderSink {
    /// The wall flags of the cell at `_coord` changed.
    fn on_walls_changed(&self, _coord: Cartesian2DCoordinate) {}

    /// The visited flag of the cell at `_coord` was set during a walk.
    fn on_visited_changed(&self, _coord: Cartesian2DCoordinate) {}

    /// The solver moved between two cells; `_is_undo` marks a retracted
    /// (backtracked) move.
    fn on_move_drawn(&self,
                     _from: Cartesian2DCoordinate,
                     _to: Cartesian2DCoordinate,
                     _is_undo: bool) {
    }
}

/// A sink that ignores everything - headless mode made explicit.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullRenderSink;

impl RenderSink for NullRenderSink {}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SinkEvent {
    WallsChanged(Cartesian2DCoordinate),
    VisitedChanged(Cartesian2DCoordinate),
    MoveDrawn {
        from: Cartesian2DCoordinate,
        to: Cartesian2DCoordinate,
        is_undo: bool,
    },
}

/// Records every notification in order. Mostly useful to tests and to
/// front ends that replay a generation or solve as an animation.
#[derive(Debug, Default)]
pub struct SinkEventLog {
    events: RefCell<Vec<SinkEvent>>,
}

impl SinkEventLog {
    pub fn new() -> SinkEventLog {
        SinkEventLog::default()
    }

    pub fn snapshot(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl RenderSink for SinkEventLog {
    fn on_walls_changed(&self, coord: Cartesian2DCoordinate) {
        self.events.borrow_mut().push(SinkEvent::WallsChanged(coord));
    }

    fn on_visited_changed(&self, coord: Cartesian2DCoordinate) {
        self.events.borrow_mut().push(SinkEvent::VisitedChanged(coord));
    }

    fn on_move_drawn(&self,
                     from: Cartesian2DCoordinate,
                     to: Cartesian2DCoordinate,
                     is_undo: bool) {
        self.events
            .borrow_mut()
            .push(SinkEvent::MoveDrawn { from, to, is_undo });
    }
}

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> String {
        String::from("   ")
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}

impl PathDisplay {
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}

impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        let contains_coordinate =
            |coordinates: &CoordinateSmallVec| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            String::from(" S ")
        } else if contains_coordinate(&self.end_coordinates) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn event_log_records_in_order() {
        let log = SinkEventLog::new();
        let a = Cartesian2DCoordinate::new(0, 0);
        let b = Cartesian2DCoordinate::new(0, 1);

        log.on_walls_changed(a);
        log.on_visited_changed(b);
        log.on_move_drawn(a, b, false);
        log.on_move_drawn(b, a, true);

        assert_eq!(log.snapshot(),
                   vec![SinkEvent::WallsChanged(a),
                        SinkEvent::VisitedChanged(b),
                        SinkEvent::MoveDrawn { from: a, to: b, is_undo: false },
                        SinkEvent::MoveDrawn { from: b, to: a, is_undo: true }]);
    }

    #[test]
    fn path_display_marks_only_path_cells() {
        let path = [Cartesian2DCoordinate::new(0, 0), Cartesian2DCoordinate::new(1, 0)];
        let display = PathDisplay::new(&path);
        assert_eq!(display.render_cell_body(path[0]), " . ");
        assert_eq!(display.render_cell_body(Cartesian2DCoordinate::new(2, 2)), "   ");
    }

    #[test]
    fn start_end_display_marks_endpoints() {
        let starts: CoordinateSmallVec =
            [Cartesian2DCoordinate::new(0, 0)].iter().cloned().collect();
        let ends: CoordinateSmallVec =
            [Cartesian2DCoordinate::new(3, 3)].iter().cloned().collect();
        let display = StartEndPointsDisplay::new(starts, ends);

        assert_eq!(display.render_cell_body(Cartesian2DCoordinate::new(0, 0)), " S ");
        assert_eq!(display.render_cell_body(Cartesian2DCoordinate::new(3, 3)), " E ");
        assert_eq!(display.render_cell_body(Cartesian2DCoordinate::new(1, 2)), "   ");
    }
}
