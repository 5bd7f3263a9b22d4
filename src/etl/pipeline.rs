//! Entry points: decode one buffer, map it, hand the upserts to the sink.
//!
//! One invocation is strictly sequential. The whole buffer is decoded before
//! anything is mapped, and everything is mapped before the first upsert
//! reaches the sink, so a malformed buffer emits nothing. A sink failure
//! aborts the invocation; retrying it from the same bytes is safe because
//! identifiers are deterministic and sinks are idempotent.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use entgraph::etl::{EntryPoint, MemorySink, NoopObserver, Pipeline};
//!
//! let sink = Arc::new(MemorySink::new());
//! let pipeline = Pipeline::builder()
//!     .add_sink(sink.clone())
//!     .with_observer(Arc::new(NoopObserver))
//!     .build();
//!
//! let stats = pipeline.handle(EntryPoint::Batch, &[]).unwrap();
//! assert_eq!(stats.total(), 0);
//! assert!(sink.is_empty());
//! ```

use prost::Message;
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;
use std::sync::Arc;

use crate::etl::decoder::{decode, DecodeError};
use crate::etl::entity::{EntityKind, Upsert};
use crate::etl::mapper::Mapper;
use crate::etl::observer::{Observer, TracingObserver};
use crate::etl::sink::{MultiSink, Sink};
use crate::pb::contract_v1::EventsCalls;
use crate::pb::cosmos_v1::{EventList, TransactionList};
use crate::pb::entgraph::v1::Batch;

/// Which envelope an input buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `entgraph.v1.Batch`: every section.
    Batch,
    /// `contract.v1.EventsCalls`.
    EventsAndCalls,
    /// `sf.substreams.cosmos.v1.EventList`.
    TypedEvents,
    /// `sf.substreams.cosmos.v1.TransactionList`.
    Transactions,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 4] = [
        EntryPoint::Batch,
        EntryPoint::EventsAndCalls,
        EntryPoint::TypedEvents,
        EntryPoint::Transactions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Batch => "batch",
            EntryPoint::EventsAndCalls => "events-and-calls",
            EntryPoint::TypedEvents => "typed-events",
            EntryPoint::Transactions => "transactions",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown entry point '{0}' (expected batch, events-and-calls, typed-events or transactions)")]
pub struct UnknownEntryPoint(String);

impl FromStr for EntryPoint {
    type Err = UnknownEntryPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|entry| entry.as_str() == s)
            .ok_or_else(|| UnknownEntryPoint(s.to_string()))
    }
}

/// Upserts of one invocation, tallied per entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub events: usize,
    pub calls: usize,
    pub attrs: usize,
    pub transactions: usize,
    pub signatures: usize,
    /// Records skipped because a required sub-message was unset.
    pub skipped: usize,
}

impl BatchStats {
    fn tally(upserts: &[Upsert], skipped: usize) -> Self {
        let mut stats = Self {
            skipped,
            ..Self::default()
        };
        for upsert in upserts {
            *stats.slot(upsert.kind()) += 1;
        }
        stats
    }

    fn slot(&mut self, kind: EntityKind) -> &mut usize {
        match kind {
            EntityKind::Event => &mut self.events,
            EntityKind::Call => &mut self.calls,
            EntityKind::Attr => &mut self.attrs,
            EntityKind::Transaction => &mut self.transactions,
            EntityKind::Signature => &mut self.signatures,
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Event => self.events,
            EntityKind::Call => self.calls,
            EntityKind::Attr => self.attrs,
            EntityKind::Transaction => self.transactions,
            EntityKind::Signature => self.signatures,
        }
    }

    /// Upserts handed to the sink.
    pub fn total(&self) -> usize {
        EntityKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }
}

impl AddAssign for BatchStats {
    fn add_assign(&mut self, other: Self) {
        self.events += other.events;
        self.calls += other.calls;
        self.attrs += other.attrs;
        self.transactions += other.transactions;
        self.signatures += other.signatures;
        self.skipped += other.skipped;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("sink '{sink}' failed")]
    Sink {
        sink: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Output of the pure decode + map stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapped {
    pub upserts: Vec<Upsert>,
    pub skipped: usize,
}

/// Decodes `bytes` as the envelope of `entry` and maps it, without touching
/// any sink.
pub fn map_bytes(
    entry: EntryPoint,
    bytes: &[u8],
    observer: &dyn Observer,
) -> Result<Mapped, DecodeError> {
    match entry {
        EntryPoint::Batch => map_with(bytes, observer, |m, batch: &Batch| m.batch(batch)),
        EntryPoint::EventsAndCalls => map_with(bytes, observer, |m, envelope: &EventsCalls| {
            m.events_and_calls(envelope);
        }),
        EntryPoint::TypedEvents => map_with(bytes, observer, |m, list: &EventList| {
            m.typed_events(Some(list));
        }),
        EntryPoint::Transactions => map_with(bytes, observer, |m, list: &TransactionList| {
            m.transactions(Some(list));
        }),
    }
}

fn map_with<M, F>(bytes: &[u8], observer: &dyn Observer, map: F) -> Result<Mapped, DecodeError>
where
    M: Message + Default,
    F: FnOnce(&mut Mapper<'_>, &M),
{
    let message = decode::<M>(bytes)?;
    let mut mapper = Mapper::new(observer);
    map(&mut mapper, &message);
    let skipped = mapper.skipped();
    Ok(Mapped {
        upserts: mapper.finish(),
        skipped,
    })
}

pub struct Pipeline {
    sink: Arc<dyn Sink>,
    observer: Arc<dyn Observer>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Runs the entry point named by `entry` over `bytes`.
    pub fn handle(&self, entry: EntryPoint, bytes: &[u8]) -> Result<BatchStats, PipelineError> {
        let Mapped { upserts, skipped } = map_bytes(entry, bytes, self.observer.as_ref())
            .inspect_err(|error| self.observer.decode_failed(entry, error))?;
        self.observer.decoded(entry, bytes.len());

        let stats = BatchStats::tally(&upserts, skipped);
        if let Err(source) = self.sink.upsert_all(&upserts) {
            self.observer.sink_failed(entry, self.sink.name(), &source);
            return Err(PipelineError::Sink {
                sink: self.sink.name().to_string(),
                source,
            });
        }

        for upsert in &upserts {
            self.observer.emitted(upsert);
        }

        self.observer.completed(entry, &stats);
        Ok(stats)
    }

    pub fn handle_batch(&self, bytes: &[u8]) -> Result<BatchStats, PipelineError> {
        self.handle(EntryPoint::Batch, bytes)
    }

    pub fn handle_events_and_calls(&self, bytes: &[u8]) -> Result<BatchStats, PipelineError> {
        self.handle(EntryPoint::EventsAndCalls, bytes)
    }

    pub fn handle_typed_events(&self, bytes: &[u8]) -> Result<BatchStats, PipelineError> {
        self.handle(EntryPoint::TypedEvents, bytes)
    }

    pub fn handle_transactions(&self, bytes: &[u8]) -> Result<BatchStats, PipelineError> {
        self.handle(EntryPoint::Transactions, bytes)
    }
}

/// Builder for [`Pipeline`].
///
/// Several sinks are fanned out through a [`MultiSink`] in the order they were
/// added. Without an explicit observer, [`TracingObserver`] is used.
#[derive(Default)]
pub struct PipelineBuilder {
    sinks: Vec<Arc<dyn Sink>>,
    observer: Option<Arc<dyn Observer>>,
}

impl PipelineBuilder {
    pub fn add_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Adds multiple sinks at once.
    pub fn with_sinks(mut self, sinks: Vec<Arc<dyn Sink>>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(mut self) -> Pipeline {
        let sink: Arc<dyn Sink> = if self.sinks.len() == 1 {
            self.sinks.remove(0)
        } else {
            Arc::new(MultiSink::new(self.sinks))
        };

        Pipeline {
            sink,
            observer: self.observer.unwrap_or_else(|| Arc::new(TracingObserver)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etl::observer::NoopObserver;
    use crate::etl::sink::MemorySink;
    use crate::pb::cosmos_v1::Transaction;

    fn pipeline(sink: Arc<MemorySink>) -> Pipeline {
        Pipeline::builder()
            .add_sink(sink)
            .with_observer(Arc::new(NoopObserver))
            .build()
    }

    fn transactions() -> Vec<u8> {
        TransactionList {
            transactions: vec![Transaction {
                hash: "T1".to_string(),
                signatures: vec![vec![0xaa]],
                ..Default::default()
            }],
        }
        .encode_to_vec()
    }

    #[test]
    fn test_entry_point_names_round_trip() {
        for entry in EntryPoint::ALL {
            assert_eq!(entry.as_str().parse::<EntryPoint>().unwrap(), entry);
        }
        assert!("blocks".parse::<EntryPoint>().is_err());
    }

    #[test]
    fn test_handle_transactions_tallies_kinds() {
        let sink = Arc::new(MemorySink::new());
        let stats = pipeline(sink.clone())
            .handle_transactions(&transactions())
            .unwrap();

        assert_eq!(stats.transactions, 1);
        assert_eq!(stats.signatures, 1);
        assert_eq!(stats.total(), 2);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_decode_error_emits_nothing() {
        let sink = Arc::new(MemorySink::new());
        let bytes = transactions();
        let err = pipeline(sink.clone())
            .handle_transactions(&bytes[..bytes.len() / 2])
            .unwrap_err();

        assert!(matches!(err, PipelineError::Decode(_)));
        assert!(sink.history().is_empty());
    }

    #[test]
    fn test_builder_defaults_to_an_empty_fan_out() {
        let pipeline = Pipeline::builder().build();
        assert_eq!(pipeline.sink().name(), "multi");
        assert_eq!(pipeline.handle_batch(&[]).unwrap(), BatchStats::default());
    }

    #[test]
    fn test_map_bytes_is_pure() {
        let bytes = transactions();
        let first = map_bytes(EntryPoint::Transactions, &bytes, &NoopObserver).unwrap();
        let second = map_bytes(EntryPoint::Transactions, &bytes, &NoopObserver).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.upserts.len(), 2);
    }
}
