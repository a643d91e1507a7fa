// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Smart contract call bodies

use alloc::vec::Vec;

use crate::{
    ids::ContractId,
    proto::{self, transaction_body::Data},
};

/// Contract call parameters
///
/// `function_parameters` are ABI encoded call data and are passed through
/// untouched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractCall {
    pub contract: ContractId,
    pub gas: i64,
    /// Tinybar sent with the call
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub function_parameters: Vec<u8>,
}

/// Build a `contractCall` body
pub fn call(c: ContractCall) -> Data {
    Data::ContractCall(proto::ContractCallTransactionBody {
        contract_id: Some(c.contract.into()),
        gas: c.gas,
        amount: c.amount,
        function_parameters: c.function_parameters,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ids::ContractTarget;

    #[test]
    fn contract_call_by_num() {
        let d = call(ContractCall {
            contract: ContractId::new(1, 2, 5005),
            gas: 100_000,
            amount: 0,
            function_parameters: vec![0xa9, 0x05, 0x9c, 0xbb],
        });

        let b = match d {
            Data::ContractCall(b) => b,
            _ => panic!("unexpected body: {d}"),
        };

        assert_eq!(
            b.contract_id,
            Some(proto::ContractId {
                shard_num: 1,
                realm_num: 2,
                contract: Some(proto::contract_id::Contract::ContractNum(5005)),
            })
        );
        assert_eq!(b.gas, 100_000);
        assert_eq!(b.function_parameters, &[0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn contract_call_evm_zeroes_shard_realm() {
        let d = call(ContractCall {
            contract: ContractId {
                shard: 5,
                realm: 6,
                target: ContractTarget::EvmAddress([0x11; 20]),
            },
            gas: 1,
            amount: -1,
            function_parameters: vec![],
        });

        let b = match d {
            Data::ContractCall(b) => b,
            _ => panic!("unexpected body: {d}"),
        };

        let id = b.contract_id.unwrap();
        assert_eq!((id.shard_num, id.realm_num), (0, 0));

        // Negative amounts are passed through for the device to reject
        assert_eq!(b.amount, -1);
    }
}
