//! CLI argument parsing for waypath
//!
//! Global flags: --config, --nodes, --edges, --format, --quiet, --verbose,
//! --log-level, --log-json, --strict

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use parse::{parse_criterion, parse_format};
use waypath_core::format::OutputFormat;
use waypath_core::Criterion;

/// Waypath - cheapest and fewest-stops routes over a restricted network
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./waypath.toml or the user config dir)
    #[arg(long, global = true, env = "WAYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Eligibility table (node code, restriction flag)
    #[arg(long, global = true)]
    pub nodes: Option<PathBuf>,

    /// Connectivity table (origin, destination, weight)
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Reject malformed input rows instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two nodes
    Route {
        /// Origin node code
        origin: String,

        /// Destination node code
        destination: String,

        /// Traveler holds clearance for restricted nodes
        #[arg(long)]
        clearance: bool,

        /// Optimize for total cost or number of stops
        #[arg(long, short, value_parser = parse_criterion)]
        criterion: Option<Criterion>,
    },

    /// List the direct connections of a node
    Neighbors {
        /// Node code
        node: String,
    },

    /// Export every node and edge of the network
    Graph {
        /// Report eligibility for a traveler with clearance
        #[arg(long)]
        clearance: bool,
    },
}
