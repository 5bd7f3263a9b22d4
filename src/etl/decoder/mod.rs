//! Binary decoder: bytes in, fully materialized batch envelope out.
//!
//! Batches are protobuf messages (see [`crate::pb`]). Decoding is all or
//! nothing: a buffer that is truncated, carries an invalid tag or a length that
//! overruns the buffer fails with a [`DecodeError`] and no partial envelope is
//! returned.
//!
//! The decoder is purely structural. It does not check that hashes look like
//! hashes or that amounts parse as numbers; optional sub-messages stay `None`
//! when absent and repeated fields keep their encoded order.
//!
//! # Example
//!
//! ```rust
//! use entgraph::etl::decoder::{decode, DecodeError};
//! use entgraph::pb::cosmos_v1::TransactionList;
//!
//! let list: TransactionList = decode(&[]).unwrap();
//! assert!(list.transactions.is_empty());
//!
//! let err: DecodeError = decode::<TransactionList>(&[0x0a, 0x05, 0x01]).unwrap_err();
//! assert_eq!(err.offset(), Some(0));
//! ```

use prost::bytes::Buf;
use prost::encoding::{decode_key, decode_varint, WireType};
use prost::Message;

/// Structural failure while decoding a batch.
#[derive(Debug, thiserror::Error)]
#[error("malformed {message} ({len} bytes){}", describe_offset(.offset))]
pub struct DecodeError {
    message: &'static str,
    len: usize,
    offset: Option<usize>,
    #[source]
    source: prost::DecodeError,
}

impl DecodeError {
    /// Name of the message type that failed to decode.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Byte offset of the first top-level field whose framing is broken, when
    /// the fault can be pinned to one.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

#[allow(clippy::ref_option)]
fn describe_offset(offset: &Option<usize>) -> String {
    offset.map_or_else(String::new, |offset| format!(" at byte {offset}"))
}

/// Decodes one batch message from `bytes`.
pub fn decode<M>(bytes: &[u8]) -> Result<M, DecodeError>
where
    M: Message + Default,
{
    M::decode(bytes).map_err(|source| DecodeError {
        message: short_type_name::<M>(),
        len: bytes.len(),
        offset: locate_fault(bytes),
        source,
    })
}

fn short_type_name<M>() -> &'static str {
    let full = std::any::type_name::<M>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Walks the top-level fields of `bytes` and returns the offset of the first
/// one whose key or length framing is invalid.
///
/// Only the outer framing is checked: nested messages are opaque here since
/// telling them apart from strings needs the schema. Returns `None` when the
/// outer framing is sound or uses groups.
fn locate_fault(bytes: &[u8]) -> Option<usize> {
    let mut buf = bytes;

    while buf.has_remaining() {
        let offset = bytes.len() - buf.remaining();

        let Ok((_tag, wire_type)) = decode_key(&mut buf) else {
            return Some(offset);
        };

        let framed = match wire_type {
            WireType::Varint => decode_varint(&mut buf).is_ok(),
            WireType::SixtyFourBit => skip(&mut buf, 8),
            WireType::ThirtyTwoBit => skip(&mut buf, 4),
            WireType::LengthDelimited => match decode_varint(&mut buf) {
                Ok(len) => usize::try_from(len).is_ok_and(|len| skip(&mut buf, len)),
                Err(_) => false,
            },
            WireType::StartGroup | WireType::EndGroup => return None,
        };

        if !framed {
            return Some(offset);
        }
    }

    None
}

fn skip(buf: &mut &[u8], len: usize) -> bool {
    if buf.remaining() < len {
        return false;
    }
    buf.advance(len);
    true
}
