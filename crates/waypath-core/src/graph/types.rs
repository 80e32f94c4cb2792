use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::WaypathError;

/// Identifier of a location in the graph (e.g. an airport code)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

// Lets maps keyed by NodeId be queried with a plain &str.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Weight of an edge, or the accumulated weight of a path.
/// Always finite and non-negative once inside a `GraphStore`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this value may be stored as an edge weight
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

/// One direction of an undirected connection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Cost,
}

/// Optimization target for a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Minimize the sum of edge weights
    #[default]
    Cost,
    /// Minimize the number of edges traversed
    Hops,
}

impl std::str::FromStr for Criterion {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cost" | "costo" | "price" => Ok(Criterion::Cost),
            "hops" | "escalas" | "stops" => Ok(Criterion::Hops),
            other => Err(WaypathError::UnknownCriterion(other.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Cost => write!(f, "cost"),
            Criterion::Hops => write!(f, "hops"),
        }
    }
}

/// A successful route: the node sequence and its metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub criterion: Criterion,
    pub path: Vec<NodeId>,
    /// Total cost for `Criterion::Cost`, edge count for `Criterion::Hops`
    pub metric: f64,
}

impl Route {
    pub fn origin(&self) -> Option<&NodeId> {
        self.path.first()
    }

    pub fn destination(&self) -> Option<&NodeId> {
        self.path.last()
    }

    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of a route search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResult {
    Found(Route),
    /// Both endpoints were valid but no eligible path connects them
    NotFound,
}

impl RouteResult {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteResult::Found(route) => Some(route),
            RouteResult::NotFound => None,
        }
    }

    pub fn metric(&self) -> Option<f64> {
        self.route().map(|r| r.metric)
    }
}
