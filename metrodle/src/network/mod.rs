//! Station graph and shortest paths.
//!
//! The graph links stations that are consecutive on a shared line. Hop
//! distances feed guess scoring, and the shortest path between a route
//! game's origin and destination is the canonical route players must find.

mod bfs;
mod graph;

pub use bfs::UNREACHABLE;
pub use graph::Network;
