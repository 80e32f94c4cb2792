mod config;
mod graph;
mod logging;
mod misc;
mod neighbors;
pub mod support;
