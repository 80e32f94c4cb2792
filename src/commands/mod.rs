//! Command implementations for waypath

pub mod dispatch;
pub mod graph;
pub mod neighbors;
pub mod route;
