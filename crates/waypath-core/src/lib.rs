//! Waypath Core Library
//!
//! Constrained route search over an undirected weighted network: the graph
//! store, the traveler eligibility filter, cheapest and fewest-hops searches,
//! and the query facade, plus the CSV loader and configuration used by the
//! `waypath` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;
pub mod query;

pub use error::{BoundaryError, Result, WaypathError};
pub use graph::{Criterion, GraphStore, NodeId, Route, RouteResult};
pub use query::query;
