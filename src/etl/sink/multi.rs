//! MultiSink fans every upsert out to several sinks in sequence.
//!
//! The first failing sink aborts the fan-out; sinks after it are not called.

use anyhow::Context;
use std::sync::Arc;

use super::Sink;
use crate::etl::entity::Upsert;

pub struct MultiSink {
    sinks: Vec<Arc<dyn Sink>>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self { sinks }
    }

    pub fn sinks(&self) -> &[Arc<dyn Sink>] {
        &self.sinks
    }
}

impl Sink for MultiSink {
    fn name(&self) -> &str {
        "multi"
    }

    fn upsert(&self, upsert: &Upsert) -> anyhow::Result<()> {
        for sink in &self.sinks {
            sink.upsert(upsert).with_context(|| {
                format!("sink '{}' rejected {} {}", sink.name(), upsert.kind(), upsert.id)
            })?;
        }
        Ok(())
    }

    fn upsert_all(&self, upserts: &[Upsert]) -> anyhow::Result<()> {
        for sink in &self.sinks {
            sink.upsert_all(upserts)
                .with_context(|| format!("sink '{}' failed", sink.name()))?;
        }
        Ok(())
    }
}
