//! Configuration for the replay tool

use clap::Parser;
use entgraph::EntryPoint;
use std::path::PathBuf;

/// Replay recorded batch files through the entgraph pipeline
///
/// Each input file holds one encoded batch. Files are replayed in the order
/// given; replaying a file twice leaves the database unchanged.
#[derive(Parser, Debug)]
#[command(name = "entgraph-replay")]
#[command(about = "Replay recorded batch files into an entity database", long_about = None)]
pub struct Config {
    /// Batch files to replay
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Envelope held by the input files
    ///
    /// One of: batch, events-and-calls, typed-events, transactions.
    #[arg(long, env = "ENTGRAPH_ENTRY", default_value = "batch")]
    pub entry: EntryPoint,

    /// Database path for storing entities
    #[arg(long, env = "ENTGRAPH_DB_PATH", default_value = "./entgraph.db")]
    pub db_path: PathBuf,

    /// Map into memory only; nothing is written to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Log a failed file and move on instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}
