//! Entities emitted by the mapper.
//!
//! An [`Upsert`] pairs a deterministic identifier with one [`Entity`]. The
//! entity kind is carried by the enum variant, so sinks can route each kind to
//! its own table: identifiers only need to be unique within a kind.

use serde::Serialize;
use std::fmt;

/// Storage namespace of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Event,
    Call,
    Attr,
    Transaction,
    Signature,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Event,
        EntityKind::Call,
        EntityKind::Attr,
        EntityKind::Transaction,
        EntityKind::Signature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Event => "event",
            EntityKind::Call => "call",
            EntityKind::Attr => "attr",
            EntityKind::Transaction => "transaction",
            EntityKind::Signature => "signature",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded event.
///
/// Fixed-schema shapes carry their fields as a serialized document in
/// `json_value`; dynamic events carry `attrs`, the identifiers of their
/// [`AttrEntity`] children in encode order. An event never has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntity {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,
}

/// A decoded contract call, always document-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEntity {
    #[serde(rename = "type")]
    pub type_name: String,
    pub json_value: String,
}

/// One key/value attribute of a dynamic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttrEntity {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntity {
    pub result_code: u32,
    /// Lowercase hex, no prefix.
    pub result_data: String,
    pub result_log: String,
    pub result_info: String,
    pub result_gas_wanted: i64,
    pub result_gas_used: i64,
    /// Identifiers of the [`SignatureEntity`] children, in encode order.
    pub signatures: Vec<String>,
}

/// One transaction signature, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureEntity {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Event(EventEntity),
    Call(CallEntity),
    Attr(AttrEntity),
    Transaction(TransactionEntity),
    Signature(SignatureEntity),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Event(_) => EntityKind::Event,
            Entity::Call(_) => EntityKind::Call,
            Entity::Attr(_) => EntityKind::Attr,
            Entity::Transaction(_) => EntityKind::Transaction,
            Entity::Signature(_) => EntityKind::Signature,
        }
    }
}

/// One insert-or-overwrite handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upsert {
    pub id: String,
    pub entity: Entity,
}

impl Upsert {
    pub fn new(id: String, entity: Entity) -> Self {
        Self { id, entity }
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        let upsert = Upsert::new(
            "h-0-0".to_string(),
            Entity::Attr(AttrEntity {
                key: "a".to_string(),
                value: "1".to_string(),
            }),
        );
        assert_eq!(upsert.kind(), EntityKind::Attr);
        assert_eq!(upsert.kind().to_string(), "attr");
    }

    #[test]
    fn test_event_serializes_with_schema_field_names() {
        let entity = Entity::Event(EventEntity {
            type_name: "swap".to_string(),
            json_value: Some("{}".to_string()),
            attrs: Vec::new(),
        });
        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(json, r#"{"kind":"event","type":"swap","jsonValue":"{}"}"#);
    }

    #[test]
    fn test_transaction_serializes_camel_case() {
        let entity = Entity::Transaction(TransactionEntity {
            result_code: 0,
            result_data: "00ab0f".to_string(),
            result_log: String::new(),
            result_info: String::new(),
            result_gas_wanted: 10,
            result_gas_used: 7,
            signatures: vec!["tx-0".to_string()],
        });
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["resultData"], "00ab0f");
        assert_eq!(value["resultGasUsed"], 7);
        assert_eq!(value["signatures"][0], "tx-0");
    }
}
