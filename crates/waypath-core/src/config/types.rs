//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::Criterion;

/// Default eligibility table file name
pub const DEFAULT_NODES_FILE: &str = "destinos.csv";

/// Default connectivity table file name
pub const DEFAULT_EDGES_FILE: &str = "tarifas.csv";

/// Network configuration (`waypath.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Input table locations
    #[serde(default)]
    pub data: DataConfig,

    /// Query defaults
    #[serde(default)]
    pub query: QueryConfig,

    /// Loader behavior
    #[serde(default)]
    pub load: LoadConfig,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Locations of the two input tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Eligibility table (node code, restriction flag)
    #[serde(default = "default_nodes")]
    pub nodes: PathBuf,

    /// Connectivity table (origin, destination, weight)
    #[serde(default = "default_edges")]
    pub edges: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            edges: default_edges(),
        }
    }
}

/// Defaults applied to route queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Criterion used when `--criterion` is not given
    #[serde(default)]
    pub default_criterion: Criterion,
}

/// Loader behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Reject malformed rows instead of skipping them
    #[serde(default)]
    pub strict: bool,
}

fn default_nodes() -> PathBuf {
    PathBuf::from(DEFAULT_NODES_FILE)
}

fn default_edges() -> PathBuf {
    PathBuf::from(DEFAULT_EDGES_FILE)
}
