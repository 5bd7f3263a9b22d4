//! Dynamic events: one `Attr` sub-entity per attribute, then the parent.

use super::{Mapper, Section};
use crate::etl::entity::{AttrEntity, Entity, EventEntity, Upsert};
use crate::etl::identification::{assign_id, assign_sub_id};
use crate::pb::cosmos_v1::EventList;

impl Mapper<'_> {
    pub fn typed_events(&mut self, list: Option<&EventList>) {
        let Some(list) = list else {
            self.observer.section_absent(Section::TypedEvents);
            return;
        };

        for (index, record) in list.events.iter().enumerate() {
            // The index is consumed either way so later records keep their ids.
            let Some(event) = record.event.as_ref() else {
                self.skip(Section::TypedEvents, index, "event unset");
                continue;
            };

            let event_id = assign_id(&record.transaction_hash, index);
            let mut attrs = Vec::with_capacity(event.attributes.len());

            for (sub_index, attribute) in event.attributes.iter().enumerate() {
                let attr_id = assign_sub_id(&event_id, sub_index);
                self.push(Upsert::new(
                    attr_id.clone(),
                    Entity::Attr(AttrEntity {
                        key: attribute.key.clone(),
                        value: attribute.value.clone(),
                    }),
                ));
                attrs.push(attr_id);
            }

            self.push(Upsert::new(
                event_id,
                Entity::Event(EventEntity {
                    type_name: event.r#type.clone(),
                    json_value: None,
                    attrs,
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
    use crate::pb::cosmos_v1::{AbciEvent, Event, EventAttribute};

    fn attribute(key: &str, value: &str) -> EventAttribute {
        EventAttribute {
            key: key.to_string(),
            value: value.to_string(),
            index: true,
        }
    }

    fn event(hash: &str, kind: &str, attributes: Vec<EventAttribute>) -> Event {
        Event {
            event: Some(AbciEvent {
                r#type: kind.to_string(),
                attributes,
            }),
            transaction_hash: hash.to_string(),
        }
    }

    #[test]
    fn test_attributes_precede_parent_in_encode_order() {
        let list = EventList {
            events: vec![event(
                "TX",
                "transfer",
                vec![attribute("a", "1"), attribute("b", "2")],
            )],
        };
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.typed_events(Some(&list));
        let upserts = mapper.finish();

        let order: Vec<_> = upserts.iter().map(|u| (u.kind(), u.id.as_str())).collect();
        assert_eq!(
            order,
            [
                (EntityKind::Attr, "TX-0-0"),
                (EntityKind::Attr, "TX-0-1"),
                (EntityKind::Event, "TX-0"),
            ]
        );

        assert_eq!(
            upserts[0].entity,
            Entity::Attr(AttrEntity {
                key: "a".to_string(),
                value: "1".to_string(),
            })
        );
        assert_eq!(
            upserts[2].entity,
            Entity::Event(EventEntity {
                type_name: "transfer".to_string(),
                json_value: None,
                attrs: vec!["TX-0-0".to_string(), "TX-0-1".to_string()],
            })
        );
    }

    #[test]
    fn test_event_without_attributes_has_empty_reference_list() {
        let list = EventList {
            events: vec![event("TX", "message", Vec::new())],
        };
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.typed_events(Some(&list));
        let upserts = mapper.finish();
        assert_eq!(upserts.len(), 1);
        let Entity::Event(parent) = &upserts[0].entity else {
            panic!("expected an event");
        };
        assert!(parent.attrs.is_empty());
    }

    #[test]
    fn test_unset_event_is_skipped_but_keeps_its_index() {
        let list = EventList {
            events: vec![
                Event {
                    event: None,
                    transaction_hash: "TX".to_string(),
                },
                event("TX", "coin_spent", vec![attribute("spender", "inj1")]),
            ],
        };
        let mut mapper = Mapper::new(&NoopObserver);
        mapper.typed_events(Some(&list));
        assert_eq!(mapper.skipped(), 1);
        let ids: Vec<_> = mapper.upserts().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["TX-1-0", "TX-1"]);
    }
}
