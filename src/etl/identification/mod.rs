//! Deterministic identifiers for emitted entities.
//!
//! Every entity the mapper emits is addressed by a string derived only from
//! its inputs:
//!
//! ```text
//! record      "<transactionHash>-<positionIndex>"
//! sub-entity  "<parentId>-<subIndex>"
//! ```
//!
//! Re-running the pipeline over the same bytes therefore yields the same
//! identifiers, which is what makes the downstream upserts idempotent.
//! Indices are always rendered in base 10 with no padding.
//!
//! Uniqueness holds only as far as the inputs are unique: two records with the
//! same transaction hash at the same list position collide, and nothing here
//! tries to prevent that.

/// Identifier of a record at `index` in its source list.
///
/// `index` is list-local: each record list starts counting at zero, so two
/// different shapes at the same position share an identifier. They are
/// disambiguated by entity kind at the sink.
pub fn assign_id(tx_hash: &str, index: usize) -> String {
    join(tx_hash, index)
}

/// Identifier of the `index`-th sub-entity (attribute, signature) of `parent_id`.
pub fn assign_sub_id(parent_id: &str, index: usize) -> String {
    join(parent_id, index)
}

fn join(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}
