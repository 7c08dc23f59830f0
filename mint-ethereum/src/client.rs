// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::rpc::types::eth::{Filter, Log};
use alloy_primitives::{Address, Bytes, TxHash, U64};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::{
    common::{parse_quantity, EthereumServiceError},
    provider::{Eip1193Provider, RequestArguments},
};

/// The part of a transaction receipt needed to decide whether a transaction landed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// `0x1` on success, `0x0` on revert. Pre-Byzantium receipts have no status.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.status.map_or(true, |status| status == U64::from(1))
    }
}

/// Typed JSON-RPC queries on top of an injected wallet provider.
pub struct WalletClient<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: Eip1193Provider + ?Sized> WalletClient<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    async fn request(
        &self,
        method: &'static str,
        params: Option<Value>,
    ) -> Result<Value, EthereumServiceError> {
        let arguments = RequestArguments {
            method: method.to_string(),
            params,
        };
        Ok(self.provider.request(arguments).await?)
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Option<Value>,
    ) -> Result<T, EthereumServiceError> {
        let response = self.request(method, params).await?;
        serde_json::from_value(response.clone()).map_err(|_| {
            EthereumServiceError::UnexpectedResponse {
                method,
                response: response.to_string(),
            }
        })
    }

    pub async fn chain_id(&self) -> Result<u64, EthereumServiceError> {
        let response = self.request("eth_chainId", None).await?;
        parse_quantity("eth_chainId", response)
    }

    /// Returns the accounts the user has already authorized for this page.
    pub async fn accounts(&self) -> Result<Vec<String>, EthereumServiceError> {
        self.request_as("eth_accounts", None).await
    }

    /// Asks the wallet to authorize this page, prompting the user if needed.
    pub async fn request_accounts(&self) -> Result<Vec<String>, EthereumServiceError> {
        self.request_as("eth_requestAccounts", None).await
    }

    pub async fn block_number(&self) -> Result<u64, EthereumServiceError> {
        let response = self.request("eth_blockNumber", None).await?;
        parse_quantity("eth_blockNumber", response)
    }

    /// Executes a read-only call against the latest block.
    pub async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, EthereumServiceError> {
        let params = json!([{ "to": to, "data": data }, "latest"]);
        self.request_as("eth_call", Some(params)).await
    }

    /// Submits a transaction for the wallet to sign and broadcast.
    pub async fn send_transaction(
        &self,
        from: &str,
        to: Address,
        data: Bytes,
    ) -> Result<TxHash, EthereumServiceError> {
        let params = json!([{ "from": from, "to": to, "data": data }]);
        self.request_as("eth_sendTransaction", Some(params)).await
    }

    /// Returns `None` while the transaction is still pending.
    pub async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, EthereumServiceError> {
        self.request_as("eth_getTransactionReceipt", Some(json!([hash])))
            .await
    }

    pub async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, EthereumServiceError> {
        let params = json!([serde_json::to_value(filter)?]);
        self.request_as("eth_getLogs", Some(params)).await
    }
}
