//! Command-line entry points
//!
//! `args` holds the clap definitions; this module dispatches subcommands and
//! renders results for the terminal.

pub mod args;

pub use args::{Cli, Commands};

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, trace};

use crate::api::ApiServer;
use crate::collatz::{compute_batch, compute_single, BatchResult, SequenceResult};
use crate::config::loader::load_config;

/// Log filter for a `-v` count; `None` when no flag was given.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        2 => Some("trace"),
        _ => Some("trace,hyper=debug,tower=debug"),
    }
}

/// Initializes the global subscriber.
///
/// Precedence: `-v` flags, then `RUST_LOG`, then the configured level, then
/// `info`.
pub fn init_tracing(verbose: u8, configured: Option<&str>) {
    let filter = match verbosity_filter(verbose) {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(configured.unwrap_or("info"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .with_line_number(verbose >= 3)
        .init();
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port, config } => run_serve(cli.verbose, host, port, config).await,
        Commands::Sequence { start_number, json } => {
            init_tracing(cli.verbose, None);
            let result = compute_single(start_number)?;
            write_sequence(&mut std::io::stdout().lock(), &result, json)
        }
        Commands::Batch { start, end, json } => {
            init_tracing(cli.verbose, None);
            let batch = compute_batch(start, end)?;
            write_batch(&mut std::io::stdout().lock(), &batch, json)
        }
    }
}

async fn run_serve(
    verbose: u8,
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path.as_deref()).await?;
    init_tracing(verbose, config.log_level.as_deref());

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    debug!("Syracuse started with verbosity level: {}", verbose);
    trace!("Effective configuration: {:?}", config);

    ApiServer::new(config).start().await
}

pub fn write_sequence<W: Write>(out: &mut W, result: &SequenceResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        return Ok(());
    }

    let values: Vec<String> = result.sequence.iter().map(u128::to_string).collect();
    writeln!(out, "Sequence: {}", values.join(" -> "))?;
    writeln!(out, "Steps: {}", result.steps)?;
    writeln!(out, "Max value: {}", result.max_value)?;
    writeln!(out, "Min: {}", result.statistics.min)?;
    writeln!(out, "Mean: {:.4}", result.statistics.mean)?;
    writeln!(out, "Std: {:.4}", result.statistics.std)?;
    Ok(())
}

pub fn write_batch<W: Write>(out: &mut W, batch: &BatchResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, batch)?;
        writeln!(out)?;
        return Ok(());
    }

    for (n, entry) in batch.iter() {
        writeln!(
            out,
            "{}: steps={} max_value={}",
            n, entry.steps, entry.max_value
        )?;
    }
    Ok(())
}
