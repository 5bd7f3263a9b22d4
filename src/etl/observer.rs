//! Diagnostics capability injected into the pipeline.
//!
//! The pipeline never logs on its own: every notable step is reported to an
//! [`Observer`], which the host chooses when building the pipeline. All hooks
//! default to doing nothing, so an observer only overrides what it needs.

use crate::etl::decoder::DecodeError;
use crate::etl::entity::Upsert;
use crate::etl::mapper::Section;
use crate::etl::pipeline::{BatchStats, EntryPoint};

pub trait Observer: Send + Sync {
    /// The input buffer decoded into a well-formed envelope.
    fn decoded(&self, _entry: EntryPoint, _len: usize) {}

    /// The input buffer was rejected. Nothing was emitted.
    fn decode_failed(&self, _entry: EntryPoint, _error: &DecodeError) {}

    /// A top-level section was not present in the envelope.
    fn section_absent(&self, _section: Section) {}

    /// A record was skipped because an optional sub-message it needs is unset.
    fn record_skipped(&self, _section: Section, _index: usize, _reason: &'static str) {}

    /// One upsert was accepted by the sink.
    fn emitted(&self, _upsert: &Upsert) {}

    /// The sink rejected an upsert; the invocation is aborted.
    fn sink_failed(&self, _entry: EntryPoint, _sink: &str, _error: &anyhow::Error) {}

    /// Every upsert of the invocation was accepted.
    fn completed(&self, _entry: EntryPoint, _stats: &BatchStats) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Forwards pipeline activity to `tracing` and `metrics`.
///
/// Counters:
/// - `entgraph_entities_emitted_total{kind}`
/// - `entgraph_batches_total{entry, outcome}`
/// - `entgraph_records_skipped_total{section}`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn decoded(&self, entry: EntryPoint, len: usize) {
        tracing::debug!(
            target: "entgraph::etl::pipeline",
            entry = %entry,
            len,
            "Decoded batch"
        );
    }

    fn decode_failed(&self, entry: EntryPoint, error: &DecodeError) {
        metrics::counter!(
            "entgraph_batches_total",
            "entry" => entry.as_str(),
            "outcome" => "decode_error"
        )
        .increment(1);
        tracing::warn!(
            target: "entgraph::etl::pipeline",
            entry = %entry,
            offset = ?error.offset(),
            cause = ?std::error::Error::source(error).map(ToString::to_string),
            "Rejected batch: {}",
            error
        );
    }

    fn section_absent(&self, section: Section) {
        tracing::trace!(
            target: "entgraph::etl::mapper",
            section = %section,
            "Section absent, skipping"
        );
    }

    fn record_skipped(&self, section: Section, index: usize, reason: &'static str) {
        metrics::counter!("entgraph_records_skipped_total", "section" => section.as_str())
            .increment(1);
        tracing::debug!(
            target: "entgraph::etl::mapper",
            section = %section,
            index,
            reason,
            "Skipped record"
        );
    }

    fn emitted(&self, upsert: &Upsert) {
        metrics::counter!("entgraph_entities_emitted_total", "kind" => upsert.kind().as_str())
            .increment(1);
        tracing::trace!(
            target: "entgraph::etl::pipeline",
            kind = %upsert.kind(),
            id = %upsert.id,
            "Upsert"
        );
    }

    fn sink_failed(&self, entry: EntryPoint, sink: &str, error: &anyhow::Error) {
        metrics::counter!(
            "entgraph_batches_total",
            "entry" => entry.as_str(),
            "outcome" => "sink_error"
        )
        .increment(1);
        tracing::error!(
            target: "entgraph::etl::pipeline",
            entry = %entry,
            sink,
            error = %error,
            "Sink failed"
        );
    }

    fn completed(&self, entry: EntryPoint, stats: &BatchStats) {
        metrics::counter!(
            "entgraph_batches_total",
            "entry" => entry.as_str(),
            "outcome" => "ok"
        )
        .increment(1);
        tracing::info!(
            target: "entgraph::etl::pipeline",
            entry = %entry,
            upserts = stats.total(),
            skipped = stats.skipped,
            "Batch complete"
        );
    }
}
