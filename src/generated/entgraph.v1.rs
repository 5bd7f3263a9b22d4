// @generated
// This file is @generated by prost-build.
/// One invocation's worth of decoded activity. Every section is optional.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Batch {
    #[prost(message, optional, tag = "1")]
    pub events: ::core::option::Option<super::super::contract::v1::Events>,
    #[prost(message, optional, tag = "2")]
    pub calls: ::core::option::Option<super::super::contract::v1::Calls>,
    #[prost(message, optional, tag = "3")]
    pub typed_events: ::core::option::Option<super::super::sf::substreams::cosmos::v1::EventList>,
    #[prost(message, optional, tag = "4")]
    pub transactions: ::core::option::Option<super::super::sf::substreams::cosmos::v1::TransactionList>,
}
