//! Record mapper: decoded envelope in, ordered upserts out.
//!
//! The mapper is a pure transform. It walks each present section in declared
//! order, and each record list in encode order, and buffers one [`Upsert`] per
//! entity. Sub-entities (attributes, signatures) are buffered before the
//! parent that references them.
//!
//! Fixed-schema event and call records become document-shaped entities via
//! the per-shape field tables in `shapes.rs`. Dynamic events and transactions
//! build their typed entities directly.

mod attributes;
mod document;
mod shapes;
mod transactions;

use std::fmt;

pub use document::{DocValue, Document, FieldSpec, Shape};
pub use transactions::to_hex;

use crate::etl::entity::{CallEntity, Entity, EntityKind, EventEntity, Upsert};
use crate::etl::identification::assign_id;
use crate::etl::observer::Observer;
use crate::pb::contract_v1::{Calls, Events, EventsCalls};
use crate::pb::entgraph::v1::Batch;

/// Top-level section of an envelope, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Events,
    Calls,
    TypedEvents,
    Transactions,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Events => "events",
            Section::Calls => "calls",
            Section::TypedEvents => "typed_events",
            Section::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buffers the upserts for one invocation.
pub struct Mapper<'a> {
    observer: &'a dyn Observer,
    upserts: Vec<Upsert>,
    skipped: usize,
}

impl<'a> Mapper<'a> {
    pub fn new(observer: &'a dyn Observer) -> Self {
        Self {
            observer,
            upserts: Vec::new(),
            skipped: 0,
        }
    }

    /// Maps every section of a combined batch.
    pub fn batch(&mut self, batch: &Batch) {
        self.events(batch.events.as_ref());
        self.calls(batch.calls.as_ref());
        self.typed_events(batch.typed_events.as_ref());
        self.transactions(batch.transactions.as_ref());
    }

    /// Maps an events + calls envelope. Either section may be absent.
    pub fn events_and_calls(&mut self, envelope: &EventsCalls) {
        self.events(envelope.events.as_ref());
        self.calls(envelope.calls.as_ref());
    }

    pub fn events(&mut self, events: Option<&Events>) {
        let Some(events) = events else {
            self.observer.section_absent(Section::Events);
            return;
        };

        self.shape_list(&events.factory_fee_amount_enableds);
        self.shape_list(&events.factory_owner_changeds);
        self.shape_list(&events.factory_pool_createds);
        self.shape_list(&events.pools_burns);
        self.shape_list(&events.pools_collects);
        self.shape_list(&events.pools_collect_protocols);
        self.shape_list(&events.pools_flashes);
        self.shape_list(&events.pools_increase_observation_cardinality_nexts);
        self.shape_list(&events.pools_initializes);
        self.shape_list(&events.pools_mints);
        self.shape_list(&events.pools_set_fee_protocols);
        self.shape_list(&events.pools_swaps);
    }

    pub fn calls(&mut self, calls: Option<&Calls>) {
        let Some(calls) = calls else {
            self.observer.section_absent(Section::Calls);
            return;
        };

        self.shape_list(&calls.factory_call_create_pools);
        self.shape_list(&calls.factory_call_enable_fee_amounts);
        self.shape_list(&calls.factory_call_set_owners);
        self.shape_list(&calls.pools_call_burns);
        self.shape_list(&calls.pools_call_collects);
        self.shape_list(&calls.pools_call_collect_protocols);
        self.shape_list(&calls.pools_call_flashes);
        self.shape_list(&calls.pools_call_increase_observation_cardinality_nexts);
        self.shape_list(&calls.pools_call_initializes);
        self.shape_list(&calls.pools_call_mints);
        self.shape_list(&calls.pools_call_set_fee_protocols);
        self.shape_list(&calls.pools_call_swaps);
    }

    /// Upserts buffered so far, in emission order.
    pub fn upserts(&self) -> &[Upsert] {
        &self.upserts
    }

    /// Records skipped because a required sub-message was unset.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> Vec<Upsert> {
        self.upserts
    }

    /// Indices are local to the list: every shape counts from zero.
    fn shape_list<S: Shape>(&mut self, records: &[S]) {
        for (index, record) in records.iter().enumerate() {
            let id = assign_id(record.tx_hash(), index);
            let json_value = Document::project(record).to_json();
            self.push(Upsert::new(id, document_entity::<S>(json_value)));
        }
    }

    fn push(&mut self, upsert: Upsert) {
        self.upserts.push(upsert);
    }

    fn skip(&mut self, section: Section, index: usize, reason: &'static str) {
        self.skipped += 1;
        self.observer.record_skipped(section, index, reason);
    }
}

fn document_entity<S: Shape>(json_value: String) -> Entity {
    let type_name = S::TYPE_NAME.to_string();
    if S::KIND == EntityKind::Call {
        Entity::Call(CallEntity {
            type_name,
            json_value,
        })
    } else {
        Entity::Event(EventEntity {
            type_name,
            json_value: Some(json_value),
            attrs: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etl::observer::NoopObserver;
    use crate::pb::contract_v1::{FactorySetOwnerCall, PoolsInitialize, PoolsMint, PoolsSwap};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        absent: Mutex<Vec<Section>>,
    }

    impl Observer for RecordingObserver {
        fn section_absent(&self, section: Section) {
            self.absent.lock().unwrap().push(section);
        }
    }

    fn ids(upserts: &[Upsert]) -> Vec<(EntityKind, &str)> {
        upserts.iter().map(|u| (u.kind(), u.id.as_str())).collect()
    }

    fn events() -> Events {
        Events {
            pools_initializes: vec![PoolsInitialize {
                evt_tx_hash: "0xa".to_string(),
                sqrt_price_x96: "1".to_string(),
                ..Default::default()
            }],
            pools_mints: vec![
                PoolsMint {
                    evt_tx_hash: "0xb".to_string(),
                    ..Default::default()
                },
                PoolsMint {
                    evt_tx_hash: "0xb".to_string(),
                    ..Default::default()
                },
            ],
            pools_swaps: vec![PoolsSwap {
                evt_tx_hash: "0xa".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_lists_are_indexed_independently() {
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.events(Some(&events()));
        assert_eq!(
            ids(mapper.upserts()),
            [
                (EntityKind::Event, "0xa-0"),
                (EntityKind::Event, "0xb-0"),
                (EntityKind::Event, "0xb-1"),
                (EntityKind::Event, "0xa-0"),
            ]
        );
    }

    #[test]
    fn test_event_entity_carries_type_and_document() {
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.events(Some(&events()));
        let Entity::Event(event) = &mapper.upserts()[0].entity else {
            panic!("expected an event");
        };
        assert_eq!(event.type_name, "initialize");
        assert!(event.attrs.is_empty());
        assert_eq!(
            event.json_value.as_deref(),
            Some(
                r#"{"evtTxHash":"0xa","evtIndex":0,"evtBlockTime":null,"evtBlockNumber":0,"evtAddress":"","sqrtPriceX96":"1","tick":0}"#
            )
        );
    }

    #[test]
    fn test_calls_become_call_entities() {
        let calls = Calls {
            factory_call_set_owners: vec![FactorySetOwnerCall {
                call_tx_hash: "0xc".to_string(),
                call_success: true,
                u_owner: vec![0x00, 0xab, 0x0f],
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.calls(Some(&calls));
        let upserts = mapper.finish();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].id, "0xc-0");
        let Entity::Call(call) = &upserts[0].entity else {
            panic!("expected a call");
        };
        assert_eq!(call.type_name, "setOwner");
        assert!(call.json_value.ends_with(r#""callSuccess":true,"uOwner":"00ab0f"}"#));
    }

    #[test]
    fn test_absent_calls_still_maps_events() {
        let observer = RecordingObserver::default();
        let mut mapper = Mapper::new(&observer);
        mapper.events_and_calls(&EventsCalls {
            events: Some(events()),
            calls: None,
        });
        let upserts = mapper.finish();
        assert_eq!(upserts.len(), 4);
        assert!(upserts.iter().all(|u| u.kind() == EntityKind::Event));
        assert_eq!(*observer.absent.lock().unwrap(), [Section::Calls]);
    }

    #[test]
    fn test_empty_batch_reports_every_section_absent() {
        let observer = RecordingObserver::default();
        let mut mapper = Mapper::new(&observer);
        mapper.batch(&Batch::default());
        assert!(mapper.upserts().is_empty());
        assert_eq!(
            *observer.absent.lock().unwrap(),
            [
                Section::Events,
                Section::Calls,
                Section::TypedEvents,
                Section::Transactions,
            ]
        );
    }

    #[test]
    fn test_present_empty_section_is_not_absent() {
        let observer = RecordingObserver::default();
        let mut mapper = Mapper::new(&observer);
        mapper.events(Some(&Events::default()));
        assert!(mapper.upserts().is_empty());
        assert!(observer.absent.lock().unwrap().is_empty());
    }
}
