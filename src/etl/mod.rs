pub mod decoder;
pub mod entity;
pub mod identification;
pub mod mapper;
pub mod observer;
pub mod pipeline;
pub mod sink;

pub use decoder::{decode, DecodeError};
pub use entity::{
    AttrEntity, CallEntity, Entity, EntityKind, EventEntity, SignatureEntity, TransactionEntity,
    Upsert,
};
pub use identification::{assign_id, assign_sub_id};
pub use mapper::{to_hex, Mapper, Section};
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use pipeline::{
    map_bytes, BatchStats, EntryPoint, Mapped, Pipeline, PipelineBuilder, PipelineError,
};
pub use sink::{MemorySink, MultiSink, Sink};
