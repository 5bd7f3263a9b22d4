//! Persistence collaborator.
//!
//! A sink stores upserts keyed by `(kind, id)`. Implementations must be
//! idempotent: applying the same upsert any number of times converges to one
//! stored value. Identifiers only need to be unique within an entity kind.
//!
//! Calls are synchronous and happen in emission order. A sink that needs
//! atomicity for a whole invocation should override [`Sink::upsert_all`].

pub mod memory;
pub mod multi;

use crate::etl::entity::Upsert;

pub use memory::MemorySink;
pub use multi::MultiSink;

pub trait Sink: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Inserts the entity, or overwrites the one already stored under the
    /// same kind and identifier.
    fn upsert(&self, upsert: &Upsert) -> anyhow::Result<()>;

    /// Applies every upsert of one invocation, in order.
    fn upsert_all(&self, upserts: &[Upsert]) -> anyhow::Result<()> {
        for upsert in upserts {
            self.upsert(upsert)?;
        }
        Ok(())
    }
}
