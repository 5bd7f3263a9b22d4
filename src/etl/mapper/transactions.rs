//! Transactions: one `Signature` sub-entity per signature, then the typed
//! transaction keyed by its own hash.

use super::{Mapper, Section};
use crate::etl::entity::{Entity, SignatureEntity, TransactionEntity, Upsert};
use crate::etl::identification::assign_sub_id;
use crate::pb::cosmos_v1::TransactionList;

/// Lowercase hex, two digits per byte, no separator or prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

impl Mapper<'_> {
    pub fn transactions(&mut self, list: Option<&TransactionList>) {
        let Some(list) = list else {
            self.observer.section_absent(Section::Transactions);
            return;
        };

        for tx in &list.transactions {
            let mut signatures = Vec::with_capacity(tx.signatures.len());

            for (sub_index, signature) in tx.signatures.iter().enumerate() {
                let signature_id = assign_sub_id(&tx.hash, sub_index);
                self.push(Upsert::new(
                    signature_id.clone(),
                    Entity::Signature(SignatureEntity {
                        value: to_hex(signature),
                    }),
                ));
                signatures.push(signature_id);
            }

            self.push(Upsert::new(
                tx.hash.clone(),
                Entity::Transaction(TransactionEntity {
                    result_code: tx.result_code,
                    result_data: to_hex(&tx.result_data),
                    result_log: tx.result_log.clone(),
                    result_info: tx.result_info.clone(),
                    result_gas_wanted: tx.result_gas_wanted,
                    result_gas_used: tx.result_gas_used,
                    signatures,
                }),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etl::entity::EntityKind;
    use crate::etl::observer::NoopObserver;
    use crate::pb::cosmos_v1::Transaction;

    #[test]
    fn test_hex_is_lowercase_and_zero_padded() {
        assert_eq!(to_hex(&[0x00, 0xAB, 0x0F]), "00ab0f");
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0xff; 4]), "ffffffff");
    }

    #[test]
    fn test_transaction_with_signatures() {
        let list = TransactionList {
            transactions: vec![Transaction {
                hash: "A1B2".to_string(),
                result_code: 5,
                result_data: vec![0x00, 0xAB, 0x0F],
                result_log: "out of gas".to_string(),
                result_info: String::new(),
                result_gas_wanted: 200_000,
                result_gas_used: 200_001,
                signatures: vec![vec![0x01], vec![0xde, 0xad]],
            }],
        };
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.transactions(Some(&list));
        let upserts = mapper.finish();

        let order: Vec<_> = upserts.iter().map(|u| (u.kind(), u.id.as_str())).collect();
        assert_eq!(
            order,
            [
                (EntityKind::Signature, "A1B2-0"),
                (EntityKind::Signature, "A1B2-1"),
                (EntityKind::Transaction, "A1B2"),
            ]
        );
        assert_eq!(
            upserts[1].entity,
            Entity::Signature(SignatureEntity {
                value: "dead".to_string(),
            })
        );

        let Entity::Transaction(tx) = &upserts[2].entity else {
            panic!("expected a transaction");
        };
        assert_eq!(tx.result_code, 5);
        assert_eq!(tx.result_data, "00ab0f");
        assert_eq!(tx.result_log, "out of gas");
        assert_eq!(tx.result_gas_used, 200_001);
        assert_eq!(tx.signatures, ["A1B2-0", "A1B2-1"]);
    }

    #[test]
    fn test_unsigned_transaction_has_no_sub_entities() {
        let list = TransactionList {
            transactions: vec![Transaction {
                hash: "FF".to_string(),
                ..Default::default()
            }],
        };
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.transactions(Some(&list));
        let upserts = mapper.finish();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].id, "FF");
        let Entity::Transaction(tx) = &upserts[0].entity else {
            panic!("expected a transaction");
        };
        assert_eq!(tx.result_data, "");
        assert!(tx.signatures.is_empty());
    }
}
