//! entgraph-replay - feed recorded batches through the pipeline
//!
//! # Usage
//!
//! ```bash
//! # Replay combined batches into ./entgraph.db
//! entgraph-replay blocks/*.bin
//!
//! # Transaction lists only, without touching the database
//! entgraph-replay --entry transactions --dry-run txs/*.bin
//!
//! # Skip over corrupt files
//! RUST_LOG=entgraph=debug entgraph-replay --keep-going blocks/*.bin
//! ```

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use entgraph::etl::{MemorySink, TracingObserver};
use entgraph::{BatchStats, EntryPoint, Pipeline, Sink};
use entgraph_sqlite_sink::SqliteSink;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .init();

    tracing::info!(target: "entgraph::replay", "Starting entgraph replay");
    tracing::info!(target: "entgraph::replay", "Entry point: {}", config.entry);
    if config.dry_run {
        tracing::info!(target: "entgraph::replay", "Dry run: entities stay in memory");
    } else {
        tracing::info!(target: "entgraph::replay", "Database: {}", config.db_path.display());
    }

    let sink: Arc<dyn Sink> = if config.dry_run {
        Arc::new(MemorySink::new())
    } else {
        Arc::new(SqliteSink::new(&config.db_path)?)
    };

    let pipeline = Pipeline::builder()
        .add_sink(sink)
        .with_observer(Arc::new(TracingObserver))
        .build();

    let mut totals = BatchStats::default();
    let mut failed = 0usize;

    for input in &config.inputs {
        match replay(&pipeline, config.entry, input) {
            Ok(stats) => totals += stats,
            Err(e) if config.keep_going => {
                failed += 1;
                tracing::error!(target: "entgraph::replay", "Skipping {}: {:#}", input.display(), e);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        target: "entgraph::replay",
        files = config.inputs.len(),
        failed,
        events = totals.events,
        calls = totals.calls,
        attrs = totals.attrs,
        transactions = totals.transactions,
        signatures = totals.signatures,
        skipped = totals.skipped,
        "Replay finished"
    );

    if failed > 0 {
        anyhow::bail!("{failed} of {} inputs failed", config.inputs.len());
    }

    Ok(())
}

fn replay(pipeline: &Pipeline, entry: EntryPoint, path: &Path) -> Result<BatchStats> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    pipeline
        .handle(entry, &bytes)
        .with_context(|| format!("failed to replay {}", path.display()))
}
