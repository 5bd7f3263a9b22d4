//! Field tables for the fixed-schema contract shapes.
//!
//! One table per generated message: the `type` tag and every declared field in
//! declaration order, common header first.

use super::document::{DocValue, FieldSpec, Shape};
use crate::etl::entity::EntityKind;
use crate::pb::contract_v1::{
    FactoryCreatePoolCall, FactoryEnableFeeAmountCall, FactoryFeeAmountEnabled,
    FactoryOwnerChanged, FactoryPoolCreated, FactorySetOwnerCall, PoolsBurn, PoolsBurnCall,
    PoolsCollect, PoolsCollectCall, PoolsCollectProtocol, PoolsCollectProtocolCall, PoolsFlash,
    PoolsFlashCall, PoolsIncreaseObservationCardinalityNext,
    PoolsIncreaseObservationCardinalityNextCall, PoolsInitialize, PoolsInitializeCall, PoolsMint,
    PoolsMintCall, PoolsSetFeeProtocol, PoolsSetFeeProtocolCall, PoolsSwap, PoolsSwapCall,
};

macro_rules! shapes {
    (
        kind: $kind:expr,
        tx_hash: $hash:ident,
        header: $header:tt;
        $( $ty:ident => $name:literal $fields:tt )*
    ) => {
        $( shape!($kind, $hash, $ty, $name, $header, $fields); )*
    };
}

macro_rules! shape {
    (
        $kind:expr,
        $hash:ident,
        $ty:ident,
        $name:literal,
        { $( $hkey:literal : $hfield:ident ),* $(,)? },
        { $( $key:literal : $field:ident ),* $(,)? }
    ) => {
        impl Shape for $ty {
            const TYPE_NAME: &'static str = $name;
            const KIND: EntityKind = $kind;

            fn tx_hash(&self) -> &str {
                &self.$hash
            }

            fn fields() -> &'static [FieldSpec<Self>] {
                static FIELDS: &[FieldSpec<$ty>] = &[
                    $( FieldSpec { name: $hkey, extract: |r: &$ty| r.$hfield.doc_value() }, )*
                    $( FieldSpec { name: $key, extract: |r: &$ty| r.$field.doc_value() }, )*
                ];
                FIELDS
            }
        }
    };
}

shapes! {
    kind: EntityKind::Event,
    tx_hash: evt_tx_hash,
    header: {
        "evtTxHash": evt_tx_hash,
        "evtIndex": evt_index,
        "evtBlockTime": evt_block_time,
        "evtBlockNumber": evt_block_number,
    };

    FactoryFeeAmountEnabled => "feeAmountEnabled" {
        "fee": fee,
        "tickSpacing": tick_spacing,
    }
    FactoryOwnerChanged => "ownerChanged" {
        "newOwner": new_owner,
        "oldOwner": old_owner,
    }
    FactoryPoolCreated => "poolCreated" {
        "fee": fee,
        "pool": pool,
        "tickSpacing": tick_spacing,
        "token0": token0,
        "token1": token1,
    }
}

shapes! {
    kind: EntityKind::Event,
    tx_hash: evt_tx_hash,
    header: {
        "evtTxHash": evt_tx_hash,
        "evtIndex": evt_index,
        "evtBlockTime": evt_block_time,
        "evtBlockNumber": evt_block_number,
        "evtAddress": evt_address,
    };

    PoolsBurn => "burn" {
        "amount": amount,
        "amount0": amount0,
        "amount1": amount1,
        "owner": owner,
        "tickLower": tick_lower,
        "tickUpper": tick_upper,
    }
    PoolsCollect => "collect" {
        "amount0": amount0,
        "amount1": amount1,
        "owner": owner,
        "recipient": recipient,
        "tickLower": tick_lower,
        "tickUpper": tick_upper,
    }
    PoolsCollectProtocol => "collectProtocol" {
        "amount0": amount0,
        "amount1": amount1,
        "recipient": recipient,
        "sender": sender,
    }
    PoolsFlash => "flash" {
        "amount0": amount0,
        "amount1": amount1,
        "paid0": paid0,
        "paid1": paid1,
        "recipient": recipient,
        "sender": sender,
    }
    PoolsIncreaseObservationCardinalityNext => "increaseObservationCardinalityNext" {
        "observationCardinalityNextNew": observation_cardinality_next_new,
        "observationCardinalityNextOld": observation_cardinality_next_old,
    }
    PoolsInitialize => "initialize" {
        "sqrtPriceX96": sqrt_price_x96,
        "tick": tick,
    }
    PoolsMint => "mint" {
        "amount": amount,
        "amount0": amount0,
        "amount1": amount1,
        "owner": owner,
        "sender": sender,
        "tickLower": tick_lower,
        "tickUpper": tick_upper,
    }
    PoolsSetFeeProtocol => "setFeeProtocol" {
        "feeProtocol0New": fee_protocol0_new,
        "feeProtocol0Old": fee_protocol0_old,
        "feeProtocol1New": fee_protocol1_new,
        "feeProtocol1Old": fee_protocol1_old,
    }
    PoolsSwap => "swap" {
        "amount0": amount0,
        "amount1": amount1,
        "liquidity": liquidity,
        "recipient": recipient,
        "sender": sender,
        "sqrtPriceX96": sqrt_price_x96,
        "tick": tick,
    }
}

shapes! {
    kind: EntityKind::Call,
    tx_hash: call_tx_hash,
    header: {
        "callTxHash": call_tx_hash,
        "callBlockTime": call_block_time,
        "callBlockNumber": call_block_number,
        "callOrdinal": call_ordinal,
        "callSuccess": call_success,
    };

    FactoryCreatePoolCall => "createPool" {
        "fee": fee,
        "outputPool": output_pool,
        "tokenA": token_a,
        "tokenB": token_b,
    }
    FactoryEnableFeeAmountCall => "enableFeeAmount" {
        "fee": fee,
        "tickSpacing": tick_spacing,
    }
    FactorySetOwnerCall => "setOwner" {
        "uOwner": u_owner,
    }
}

shapes! {
    kind: EntityKind::Call,
    tx_hash: call_tx_hash,
    header: {
        "callTxHash": call_tx_hash,
        "callBlockTime": call_block_time,
        "callBlockNumber": call_block_number,
        "callOrdinal": call_ordinal,
        "callSuccess": call_success,
        "callAddress": call_address,
    };

    PoolsBurnCall => "burn" {
        "amount": amount,
        "outputAmount0": output_amount0,
        "outputAmount1": output_amount1,
        "tickLower": tick_lower,
        "tickUpper": tick_upper,
    }
    PoolsCollectCall => "collect" {
        "amount0Requested": amount0_requested,
        "amount1Requested": amount1_requested,
        "outputAmount0": output_amount0,
        "outputAmount1": output_amount1,
        "recipient": recipient,
        "tickLower": tick_lower,
        "tickUpper": tick_upper,
    }
    PoolsCollectProtocolCall => "collectProtocol" {
        "amount0Requested": amount0_requested,
        "amount1Requested": amount1_requested,
        "outputAmount0": output_amount0,
        "outputAmount1": output_amount1,
        "recipient": recipient,
    }
    PoolsFlashCall => "flash" {
        "amount0": amount0,
        "amount1": amount1,
        "data": data,
        "recipient": recipient,
    }
    PoolsIncreaseObservationCardinalityNextCall => "increaseObservationCardinalityNext" {
        "observationCardinalityNext": observation_cardinality_next,
    }
    PoolsInitializeCall => "initialize" {
        "sqrtPriceX96": sqrt_price_x96,
    }
    PoolsMintCall => "mint" {
        "amount": amount,
        "data": data,
        "outputAmount0": output_amount0,
        "outputAmount1": output_amount1,
        "recipient": recipient,
        "tickLower": tick_lower,
        "tickUpper": tick_upper,
    }
    PoolsSetFeeProtocolCall => "setFeeProtocol" {
        "feeProtocol0": fee_protocol0,
        "feeProtocol1": fee_protocol1,
    }
    PoolsSwapCall => "swap" {
        "amountSpecified": amount_specified,
        "data": data,
        "outputAmount0": output_amount0,
        "outputAmount1": output_amount1,
        "recipient": recipient,
        "sqrtPriceLimitX96": sqrt_price_limit_x96,
        "zeroForOne": zero_for_one,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names<S: Shape>() -> Vec<&'static str> {
        S::fields().iter().map(|f| f.name).collect()
    }

    fn assert_unique<S: Shape>() {
        let names = names::<S>();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate key in {}", S::TYPE_NAME);
    }

    #[test]
    fn test_factory_event_header_has_no_address() {
        assert_eq!(
            names::<FactoryOwnerChanged>(),
            ["evtTxHash", "evtIndex", "evtBlockTime", "evtBlockNumber", "newOwner", "oldOwner"]
        );
    }

    #[test]
    fn test_pool_call_header_includes_address() {
        assert_eq!(
            names::<PoolsInitializeCall>(),
            [
                "callTxHash",
                "callBlockTime",
                "callBlockNumber",
                "callOrdinal",
                "callSuccess",
                "callAddress",
                "sqrtPriceX96",
            ]
        );
    }

    #[test]
    fn test_kinds_and_type_names() {
        assert_eq!(PoolsSwap::KIND, EntityKind::Event);
        assert_eq!(PoolsSwapCall::KIND, EntityKind::Call);
        assert_eq!(PoolsSwap::TYPE_NAME, "swap");
        assert_eq!(PoolsSwapCall::TYPE_NAME, "swap");
        assert_eq!(FactoryPoolCreated::TYPE_NAME, "poolCreated");
        assert_eq!(FactoryCreatePoolCall::TYPE_NAME, "createPool");
    }

    #[test]
    fn test_tx_hash_reads_own_header() {
        let call = FactorySetOwnerCall {
            call_tx_hash: "0xcafe".to_string(),
            ..Default::default()
        };
        assert_eq!(call.tx_hash(), "0xcafe");
    }

    #[test]
    fn test_every_table_has_unique_keys() {
        assert_unique::<FactoryFeeAmountEnabled>();
        assert_unique::<FactoryOwnerChanged>();
        assert_unique::<FactoryPoolCreated>();
        assert_unique::<PoolsBurn>();
        assert_unique::<PoolsCollect>();
        assert_unique::<PoolsCollectProtocol>();
        assert_unique::<PoolsFlash>();
        assert_unique::<PoolsIncreaseObservationCardinalityNext>();
        assert_unique::<PoolsInitialize>();
        assert_unique::<PoolsMint>();
        assert_unique::<PoolsSetFeeProtocol>();
        assert_unique::<PoolsSwap>();
        assert_unique::<FactoryCreatePoolCall>();
        assert_unique::<FactoryEnableFeeAmountCall>();
        assert_unique::<FactorySetOwnerCall>();
        assert_unique::<PoolsBurnCall>();
        assert_unique::<PoolsCollectCall>();
        assert_unique::<PoolsCollectProtocolCall>();
        assert_unique::<PoolsFlashCall>();
        assert_unique::<PoolsIncreaseObservationCardinalityNextCall>();
        assert_unique::<PoolsInitializeCall>();
        assert_unique::<PoolsMintCall>();
        assert_unique::<PoolsSetFeeProtocolCall>();
        assert_unique::<PoolsSwapCall>();
    }
}
