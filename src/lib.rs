//! **mazer** is a maze generation, solving and text rendering library.
//!
//! A `Grid` of walled cells is carved into a perfect maze (the passages
//! form a spanning tree, so exactly one route joins any two cells) by one
//! of the `generators`, then `pathing::solve_maze` walks the route from
//! entrance to exit. Anything visual hangs off the `renderers` traits and
//! is entirely optional.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod pathing;
pub mod renderers;
pub mod union_find;
pub mod units;
