//! Loading the network from tabular input
//!
//! Two CSV tables feed a `GraphStore`:
//! - the eligibility table (`Codigo,RequiereVisa`): one restriction flag per node
//! - the connectivity table (`Origen,Destino,Precio`): one undirected edge per row
//!
//! English headers are accepted as aliases. Malformed rows are skipped and
//! reported, or rejected outright in strict mode.

pub mod table;

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::error::{Result, WaypathError};
use crate::graph::{Cost, GraphStore, NodeId};
use table::{read_table, Column, Table};

const ELIGIBILITY_COLUMNS: &[Column] = &[
    Column {
        name: "Codigo",
        aliases: &["código", "code", "node", "id"],
        required: true,
    },
    Column {
        name: "RequiereVisa",
        aliases: &["requires_visa", "restricted", "restriction", "visa"],
        required: false,
    },
];

const CONNECTIVITY_COLUMNS: &[Column] = &[
    Column {
        name: "Origen",
        aliases: &["origin", "from", "source"],
        required: true,
    },
    Column {
        name: "Destino",
        aliases: &["destination", "to", "target"],
        required: true,
    },
    Column {
        name: "Precio",
        aliases: &["price", "cost", "weight", "fare"],
        required: true,
    },
];

/// Options controlling how strictly input rows are validated
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Abort on the first malformed row instead of skipping it
    pub strict: bool,
}

/// A row that was skipped during loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub source_name: String,
    pub line: u64,
    pub reason: String,
}

/// Summary of a network load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub eligibility_rows: usize,
    pub connectivity_rows: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// One row of the eligibility table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityRecord {
    pub node: NodeId,
    pub restricted: bool,
}

/// One row of the connectivity table
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Cost,
}

/// Interpret a yes/no cell. Empty or unrecognised values count as "no".
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "sí" | "si" | "s" | "yes" | "y" | "true" | "1"
    )
}

/// Read the eligibility table from any reader
pub fn read_eligibility<R: Read>(
    reader: R,
    source_name: &str,
    opts: &LoadOptions,
) -> Result<Table<EligibilityRecord>> {
    read_table(reader, source_name, ELIGIBILITY_COLUMNS, opts, |values| {
        Ok(EligibilityRecord {
            node: NodeId::from(values[0]),
            restricted: parse_flag(values[1]),
        })
    })
}

/// Read the connectivity table from any reader
pub fn read_connectivity<R: Read>(
    reader: R,
    source_name: &str,
    opts: &LoadOptions,
) -> Result<Table<ConnectivityRecord>> {
    read_table(reader, source_name, CONNECTIVITY_COLUMNS, opts, |values| {
        let weight = values[2]
            .parse::<f64>()
            .map(Cost::new)
            .map_err(|_| format!("non-numeric weight '{}'", values[2]))?;
        if !weight.is_valid_weight() {
            return Err(format!(
                "weight must be finite and non-negative, got '{}'",
                values[2]
            ));
        }
        Ok(ConnectivityRecord {
            from: NodeId::from(values[0]),
            to: NodeId::from(values[1]),
            weight,
        })
    })
}

fn open_table(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WaypathError::DataNotFound {
                path: path.display().to_string(),
            }
        } else {
            WaypathError::io_operation("open", path.display(), e)
        }
    })
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load the eligibility table from a file
pub fn load_eligibility(path: &Path, opts: &LoadOptions) -> Result<Table<EligibilityRecord>> {
    read_eligibility(open_table(path)?, &source_name(path), opts)
}

/// Load the connectivity table from a file
pub fn load_connectivity(path: &Path, opts: &LoadOptions) -> Result<Table<ConnectivityRecord>> {
    read_connectivity(open_table(path)?, &source_name(path), opts)
}

/// Assemble a store: restriction flags first (last write wins), then edges.
pub fn build_store(
    eligibility: &[EligibilityRecord],
    connectivity: &[ConnectivityRecord],
) -> Result<GraphStore> {
    let mut store = GraphStore::new();

    for record in eligibility {
        store.set_restricted(record.node.clone(), record.restricted);
    }

    for record in connectivity {
        store.add_edge(record.from.clone(), record.to.clone(), record.weight)?;
    }

    Ok(store)
}

/// Load both tables from disk and build the store
#[tracing::instrument(
    skip(opts),
    fields(nodes = %nodes_path.display(), edges = %edges_path.display(), strict = opts.strict)
)]
pub fn load_network(
    nodes_path: &Path,
    edges_path: &Path,
    opts: &LoadOptions,
) -> Result<(GraphStore, LoadReport)> {
    let start = Instant::now();

    let eligibility = load_eligibility(nodes_path, opts)?;
    let connectivity = load_connectivity(edges_path, opts)?;
    crate::trace_time!(start, "read_tables");

    let store = build_store(&eligibility.records, &connectivity.records)?;

    let mut skipped = eligibility.skipped;
    skipped.extend(connectivity.skipped);

    let report = LoadReport {
        eligibility_rows: eligibility.records.len(),
        connectivity_rows: connectivity.records.len(),
        skipped,
    };

    tracing::debug!(
        nodes = store.node_count(),
        edges = store.edge_count(),
        skipped = report.skipped.len(),
        "network_loaded"
    );

    Ok((store, report))
}
