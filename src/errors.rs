//! Error types shared by the whole crate.
//!
//! Everything here is a programmer error detected at a call boundary -
//! nothing is retried or recovered internally.

use error_chain::error_chain;

error_chain! {
    errors {
        /// An argument that can never be valid, e.g. a zero sized grid or
        /// removing a wall between cells that are not adjacent.
        InvalidArgument(reason: String) {
            description("invalid argument")
            display("invalid argument: {}", reason)
        }
        /// An index outside the bounds of a grid or disjoint set.
        OutOfRange(index: usize, limit: usize) {
            description("index out of range")
            display("index {} out of range (limit {})", index, limit)
        }
    }
}
