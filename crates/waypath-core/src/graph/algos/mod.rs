//! Graph algorithm implementations
//!
//! Contains concrete implementations of the route searches:
//! - `bfs`: Breadth-first search for fewest-hops routes
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Common utilities used by both algorithms

pub mod bfs;
pub mod dijkstra;
pub(crate) mod shared;

pub use bfs::find_fewest_hops;
pub use dijkstra::find_cheapest;
