// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use alloy_primitives::{Address, TxHash, U256};
use alloy_sol_types::{SolCall, SolEvent};
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    common::format_quantity,
    contract::MyEpicNFT,
    provider::{Eip1193Provider, ProviderError, RequestArguments},
};

type Response = Result<Value, ProviderError>;

#[derive(Default)]
struct Script {
    queued: HashMap<String, VecDeque<Response>>,
    fallback: HashMap<String, Response>,
    calls: Vec<RequestArguments>,
}

/// A scripted in-memory wallet provider.
///
/// Each method answers from its queue of one-shot responses first, then from its
/// fallback. Unscripted methods fail as unsupported. Clones share the same script.
#[derive(Clone, Default)]
pub struct FakeProvider(Rc<RefCell<Script>>);

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response returned once by `method`.
    pub fn respond(&self, method: &str, value: Value) -> &Self {
        self.push(method, Ok(value))
    }

    /// Queues a failure returned once by `method`.
    pub fn fail(&self, method: &str, error: ProviderError) -> &Self {
        self.push(method, Err(error))
    }

    /// Sets the response of `method` once its queue is empty.
    pub fn respond_always(&self, method: &str, value: Value) -> &Self {
        self.0
            .borrow_mut()
            .fallback
            .insert(method.to_string(), Ok(value));
        self
    }

    fn push(&self, method: &str, response: Response) -> &Self {
        self.0
            .borrow_mut()
            .queued
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// The requests received so far for `method`, in order.
    pub fn calls_to(&self, method: &str) -> Vec<RequestArguments> {
        self.0
            .borrow()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls_to(method).len()
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for FakeProvider {
    async fn request(&self, arguments: RequestArguments) -> Result<Value, ProviderError> {
        let mut script = self.0.borrow_mut();
        script.calls.push(arguments.clone());
        let method = arguments.method.as_str();
        if let Some(response) = script
            .queued
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
        {
            return response;
        }
        match script.fallback.get(method) {
            Some(response) => response.clone(),
            None => Err(ProviderError::from_code(
                -32601,
                format!("the method {method} does not exist/is not available"),
            )),
        }
    }
}

/// The `eth_call` answer of `getTotalNFTsMintedSoFar()`.
pub fn total_minted_response(total: u64) -> Value {
    let encoded = MyEpicNFT::getTotalNFTsMintedSoFarCall::abi_encode_returns(&(U256::from(total),));
    json!(alloy_primitives::hex::encode_prefixed(encoded))
}

pub fn quantity(value: u64) -> Value {
    json!(format_quantity(value))
}

pub fn tx_hash(byte: u8) -> TxHash {
    TxHash::repeat_byte(byte)
}

/// A mined receipt with the given status (`true` for success).
pub fn receipt_response(hash: TxHash, block_number: u64, success: bool) -> Value {
    json!({
        "transactionHash": hash,
        "blockNumber": format_quantity(block_number),
        "status": if success { "0x1" } else { "0x0" },
    })
}

/// A `NewEpicNFTMinted` log entry as returned by `eth_getLogs`.
pub fn minted_log(contract: Address, sender: Address, token_id: u64, block_number: u64) -> Value {
    let event = MyEpicNFT::NewEpicNFTMinted {
        sender,
        tokenId: U256::from(token_id),
    };
    json!({
        "address": contract,
        "topics": [MyEpicNFT::NewEpicNFTMinted::SIGNATURE_HASH],
        "data": alloy_primitives::hex::encode_prefixed(event.encode_data()),
        "blockHash": TxHash::repeat_byte(0xbb),
        "blockNumber": format_quantity(block_number),
        "transactionHash": TxHash::repeat_byte(0xcc),
        "transactionIndex": "0x0",
        "logIndex": "0x0",
        "removed": false,
    })
}
