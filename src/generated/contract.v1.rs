// @generated
// This file is @generated by prost-build.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Events {
    #[prost(message, repeated, tag = "1")]
    pub factory_fee_amount_enableds: ::prost::alloc::vec::Vec<FactoryFeeAmountEnabled>,
    #[prost(message, repeated, tag = "2")]
    pub factory_owner_changeds: ::prost::alloc::vec::Vec<FactoryOwnerChanged>,
    #[prost(message, repeated, tag = "3")]
    pub factory_pool_createds: ::prost::alloc::vec::Vec<FactoryPoolCreated>,
    #[prost(message, repeated, tag = "4")]
    pub pools_burns: ::prost::alloc::vec::Vec<PoolsBurn>,
    #[prost(message, repeated, tag = "5")]
    pub pools_collects: ::prost::alloc::vec::Vec<PoolsCollect>,
    #[prost(message, repeated, tag = "6")]
    pub pools_collect_protocols: ::prost::alloc::vec::Vec<PoolsCollectProtocol>,
    #[prost(message, repeated, tag = "7")]
    pub pools_flashes: ::prost::alloc::vec::Vec<PoolsFlash>,
    #[prost(message, repeated, tag = "8")]
    pub pools_increase_observation_cardinality_nexts: ::prost::alloc::vec::Vec<PoolsIncreaseObservationCardinalityNext>,
    #[prost(message, repeated, tag = "9")]
    pub pools_initializes: ::prost::alloc::vec::Vec<PoolsInitialize>,
    #[prost(message, repeated, tag = "10")]
    pub pools_mints: ::prost::alloc::vec::Vec<PoolsMint>,
    #[prost(message, repeated, tag = "11")]
    pub pools_set_fee_protocols: ::prost::alloc::vec::Vec<PoolsSetFeeProtocol>,
    #[prost(message, repeated, tag = "12")]
    pub pools_swaps: ::prost::alloc::vec::Vec<PoolsSwap>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Calls {
    #[prost(message, repeated, tag = "1")]
    pub factory_call_create_pools: ::prost::alloc::vec::Vec<FactoryCreatePoolCall>,
    #[prost(message, repeated, tag = "2")]
    pub factory_call_enable_fee_amounts: ::prost::alloc::vec::Vec<FactoryEnableFeeAmountCall>,
    #[prost(message, repeated, tag = "3")]
    pub factory_call_set_owners: ::prost::alloc::vec::Vec<FactorySetOwnerCall>,
    #[prost(message, repeated, tag = "4")]
    pub pools_call_burns: ::prost::alloc::vec::Vec<PoolsBurnCall>,
    #[prost(message, repeated, tag = "5")]
    pub pools_call_collects: ::prost::alloc::vec::Vec<PoolsCollectCall>,
    #[prost(message, repeated, tag = "6")]
    pub pools_call_collect_protocols: ::prost::alloc::vec::Vec<PoolsCollectProtocolCall>,
    #[prost(message, repeated, tag = "7")]
    pub pools_call_flashes: ::prost::alloc::vec::Vec<PoolsFlashCall>,
    #[prost(message, repeated, tag = "8")]
    pub pools_call_increase_observation_cardinality_nexts: ::prost::alloc::vec::Vec<PoolsIncreaseObservationCardinalityNextCall>,
    #[prost(message, repeated, tag = "9")]
    pub pools_call_initializes: ::prost::alloc::vec::Vec<PoolsInitializeCall>,
    #[prost(message, repeated, tag = "10")]
    pub pools_call_mints: ::prost::alloc::vec::Vec<PoolsMintCall>,
    #[prost(message, repeated, tag = "11")]
    pub pools_call_set_fee_protocols: ::prost::alloc::vec::Vec<PoolsSetFeeProtocolCall>,
    #[prost(message, repeated, tag = "12")]
    pub pools_call_swaps: ::prost::alloc::vec::Vec<PoolsSwapCall>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventsCalls {
    #[prost(message, optional, tag = "1")]
    pub events: ::core::option::Option<Events>,
    #[prost(message, optional, tag = "2")]
    pub calls: ::core::option::Option<Calls>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FactoryFeeAmountEnabled {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(uint64, tag = "5")]
    pub fee: u64,
    #[prost(int64, tag = "6")]
    pub tick_spacing: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FactoryOwnerChanged {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(bytes = "vec", tag = "5")]
    pub new_owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub old_owner: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FactoryPoolCreated {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(uint64, tag = "5")]
    pub fee: u64,
    #[prost(bytes = "vec", tag = "6")]
    pub pool: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "7")]
    pub tick_spacing: i64,
    #[prost(bytes = "vec", tag = "8")]
    pub token0: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub token1: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsBurn {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub amount: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "9")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "10")]
    pub tick_lower: i64,
    #[prost(int64, tag = "11")]
    pub tick_upper: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsCollect {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "8")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "10")]
    pub tick_lower: i64,
    #[prost(int64, tag = "11")]
    pub tick_upper: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsCollectProtocol {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "8")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub sender: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsFlash {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub paid0: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub paid1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "10")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "11")]
    pub sender: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsIncreaseObservationCardinalityNext {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(uint64, tag = "6")]
    pub observation_cardinality_next_new: u64,
    #[prost(uint64, tag = "7")]
    pub observation_cardinality_next_old: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsInitialize {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub sqrt_price_x96: ::prost::alloc::string::String,
    #[prost(int64, tag = "7")]
    pub tick: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsMint {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub amount: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "9")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    pub sender: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "11")]
    pub tick_lower: i64,
    #[prost(int64, tag = "12")]
    pub tick_upper: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsSetFeeProtocol {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(uint64, tag = "6")]
    pub fee_protocol0_new: u64,
    #[prost(uint64, tag = "7")]
    pub fee_protocol0_old: u64,
    #[prost(uint64, tag = "8")]
    pub fee_protocol1_new: u64,
    #[prost(uint64, tag = "9")]
    pub fee_protocol1_old: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsSwap {
    #[prost(string, tag = "1")]
    pub evt_tx_hash: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub evt_index: u32,
    #[prost(message, optional, tag = "3")]
    pub evt_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "4")]
    pub evt_block_number: u64,
    #[prost(string, tag = "5")]
    pub evt_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub liquidity: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "9")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    pub sender: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "11")]
    pub sqrt_price_x96: ::prost::alloc::string::String,
    #[prost(int64, tag = "12")]
    pub tick: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FactoryCreatePoolCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(uint64, tag = "6")]
    pub fee: u64,
    #[prost(bytes = "vec", tag = "7")]
    pub output_pool: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "8")]
    pub token_a: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub token_b: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FactoryEnableFeeAmountCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(uint64, tag = "6")]
    pub fee: u64,
    #[prost(int64, tag = "7")]
    pub tick_spacing: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FactorySetOwnerCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(bytes = "vec", tag = "6")]
    pub u_owner: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsBurnCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub output_amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub output_amount1: ::prost::alloc::string::String,
    #[prost(int64, tag = "10")]
    pub tick_lower: i64,
    #[prost(int64, tag = "11")]
    pub tick_upper: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsCollectCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount0_requested: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub amount1_requested: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub output_amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub output_amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "11")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "12")]
    pub tick_lower: i64,
    #[prost(int64, tag = "13")]
    pub tick_upper: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsCollectProtocolCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount0_requested: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub amount1_requested: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub output_amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub output_amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "11")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsFlashCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "9")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsIncreaseObservationCardinalityNextCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(uint64, tag = "7")]
    pub observation_cardinality_next: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsInitializeCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub sqrt_price_x96: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsMintCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "8")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "9")]
    pub output_amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub output_amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "11")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "12")]
    pub tick_lower: i64,
    #[prost(int64, tag = "13")]
    pub tick_upper: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsSetFeeProtocolCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(uint64, tag = "7")]
    pub fee_protocol0: u64,
    #[prost(uint64, tag = "8")]
    pub fee_protocol1: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolsSwapCall {
    #[prost(string, tag = "1")]
    pub call_tx_hash: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub call_block_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "3")]
    pub call_block_number: u64,
    #[prost(uint64, tag = "4")]
    pub call_ordinal: u64,
    #[prost(bool, tag = "5")]
    pub call_success: bool,
    #[prost(string, tag = "6")]
    pub call_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub amount_specified: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "8")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "9")]
    pub output_amount0: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub output_amount1: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "11")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "12")]
    pub sqrt_price_limit_x96: ::prost::alloc::string::String,
    #[prost(bool, tag = "13")]
    pub zero_for_one: bool,
}
