//! Entgraph - batch decoding and entity mapping for block-processing pipelines.
//!
//! One invocation takes a protobuf-encoded batch of decoded chain activity
//! (contract events and calls, dynamic events, transactions), assigns every
//! record a deterministic identifier, flattens nested lists into addressable
//! sub-entities and hands the resulting upserts to a [`Sink`].
//!
//! The crate owns no CLI, file or network surface: hosts feed it bytes and
//! pick the sink and [`etl::Observer`] through [`Pipeline::builder`].

pub mod etl;
pub mod pb;

pub use etl::{
    BatchStats, DecodeError, Entity, EntityKind, EntryPoint, Pipeline, PipelineBuilder,
    PipelineError, Sink, Upsert,
};
