//! The tools module provides the helpers around the huffzip core.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
pub mod cli;
