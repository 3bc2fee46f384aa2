//! # Syracuse
//!
//! Computes Collatz ("Syracuse") trajectories and their statistics, and
//! serves them over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! syracuse serve [--host H] [--port P] [-c syracuse.toml]
//! syracuse sequence <N> [--json]
//! syracuse batch <START> <END> [--json]
//! ```
//!
//! ## Modules
//!
//! - `collatz` - Sequence generation, statistics and batch computation
//! - `api` - axum router and server with CORS
//! - `config` - TOML and environment configuration
//! - `cli` - Command-line arguments and subcommand handlers
//! - `error` - Library error type
pub mod api;
pub mod cli;
pub mod collatz;
pub mod config;
pub mod error;

pub use collatz::{compute_batch, compute_single, BatchResult, SequenceResult, Statistics};
pub use error::{Error, Result};

#[cfg(test)]
mod property_tests;
