//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success (a query that finds no route is still a success)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown or ineligible endpoint, missing or malformed tables)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, ineligible node, bad input tables (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Rejection of a route query at the engine boundary.
///
/// These are distinct from a query that simply finds no path: that outcome is
/// `RouteResult::NotFound` and is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("node {node} is not eligible without clearance")]
    Ineligible { node: NodeId },
}

impl BoundaryError {
    /// The endpoint that caused the rejection
    pub fn node(&self) -> &NodeId {
        match self {
            BoundaryError::UnknownNode { node } | BoundaryError::Ineligible { node } => node,
        }
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown criterion: {0} (expected: cost or hops)")]
    UnknownCriterion(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error("invalid weight {weight} on edge {from} - {to} (must be finite and non-negative)")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("malformed record in {source_name} at line {line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        reason: String,
    },

    #[error("data file not found: {path}")]
    DataNotFound { path: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WaypathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a malformed input row
    pub fn malformed(source_name: &str, line: u64, reason: impl Into<String>) -> Self {
        WaypathError::MalformedRecord {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UnknownCriterion(_)
            | WaypathError::UsageError(_) => ExitCode::Usage,

            WaypathError::Boundary(_)
            | WaypathError::InvalidWeight { .. }
            | WaypathError::MalformedRecord { .. }
            | WaypathError::DataNotFound { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Csv(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::FailedOperationWithTarget { .. }
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UnknownCriterion(_) => "unknown_criterion",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::Boundary(BoundaryError::UnknownNode { .. }) => "unknown_node",
            WaypathError::Boundary(BoundaryError::Ineligible { .. }) => "ineligible_node",
            WaypathError::InvalidWeight { .. } => "invalid_weight",
            WaypathError::MalformedRecord { .. } => "malformed_record",
            WaypathError::DataNotFound { .. } => "data_not_found",
            WaypathError::Io(_) => "io_error",
            WaypathError::Csv(_) => "csv_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let WaypathError::Boundary(boundary) = self {
            error_obj["node"] = serde_json::json!(boundary.node());
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
