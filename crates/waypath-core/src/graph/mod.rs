//! Graph storage and constrained route search
//!
//! Provides the engine behind every route query:
//! - `GraphStore` holding the undirected weighted network
//! - the traveler eligibility filter
//! - Dijkstra (cheapest) and BFS (fewest hops) restricted to eligible nodes

pub mod algos;
pub mod eligibility;
pub mod store;
pub mod types;

pub use algos::{find_cheapest, find_fewest_hops};
pub use eligibility::{eligible_set, EligibleSet};
pub use store::GraphStore;
pub use types::{Cost, Criterion, Edge, NodeId, Route, RouteResult};
