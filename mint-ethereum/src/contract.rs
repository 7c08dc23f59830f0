// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Bindings for the deployed NFT contract, generated from its bundled ABI artifact.

use alloy::rpc::types::eth::{Filter, Log};
use alloy_primitives::{Address, TxHash, U256};
use alloy_sol_types::{sol, SolCall, SolEvent};
use serde::{Deserialize, Serialize};

use crate::{
    client::{TransactionReceipt, WalletClient},
    common::EthereumServiceError,
    provider::Eip1193Provider,
};

sol!(MyEpicNFT, "contracts/MyEpicNFT.json");

/// A decoded `NewEpicNFTMinted` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintedEvent {
    pub sender: Address,
    pub token_id: U256,
    pub block_number: Option<u64>,
}

impl MintedEvent {
    pub fn from_log(log: &Log) -> Result<Self, EthereumServiceError> {
        let event = MyEpicNFT::NewEpicNFTMinted::decode_log_data(log.data(), true)
            .map_err(|_| EthereumServiceError::EventParsingError)?;
        Ok(Self {
            sender: event.sender,
            token_id: event.tokenId,
            block_number: log.block_number,
        })
    }
}

/// The mint contract at a fixed address, reached through the wallet provider.
pub struct MintContract<'a, P: ?Sized> {
    address: Address,
    client: WalletClient<'a, P>,
}

impl<'a, P: Eip1193Provider + ?Sized> MintContract<'a, P> {
    pub fn new(address: Address, provider: &'a P) -> Self {
        Self {
            address,
            client: WalletClient::new(provider),
        }
    }

    pub fn client(&self) -> &WalletClient<'a, P> {
        &self.client
    }

    /// Reads `getTotalNFTsMintedSoFar()`.
    pub async fn total_minted(&self) -> Result<u64, EthereumServiceError> {
        let data = MyEpicNFT::getTotalNFTsMintedSoFarCall {}.abi_encode();
        let answer = self.client.call(self.address, data.into()).await?;
        let total = MyEpicNFT::getTotalNFTsMintedSoFarCall::abi_decode_returns(&answer, true)?._0;
        u64::try_from(total).map_err(|_| EthereumServiceError::Overflow(total.to_string()))
    }

    /// Submits `makeAnEpicNFT()` from `from`. The wallet prompts the user to pay for gas.
    pub async fn mint(&self, from: &str) -> Result<PendingMint<'_, 'a, P>, EthereumServiceError> {
        let data = MyEpicNFT::makeAnEpicNFTCall {}.abi_encode();
        let hash = self
            .client
            .send_transaction(from, self.address, data.into())
            .await?;
        Ok(PendingMint {
            contract: self,
            hash,
        })
    }

    /// Returns the `NewEpicNFTMinted` events emitted in the inclusive block range.
    pub async fn minted_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<MintedEvent>, EthereumServiceError> {
        let filter = Filter::new()
            .address(self.address)
            .event_signature(MyEpicNFT::NewEpicNFTMinted::SIGNATURE_HASH)
            .from_block(from_block)
            .to_block(to_block);
        self.client
            .logs(&filter)
            .await?
            .iter()
            .map(MintedEvent::from_log)
            .collect()
    }
}

/// A submitted mint transaction that may not be mined yet.
pub struct PendingMint<'c, 'a, P: ?Sized> {
    contract: &'c MintContract<'a, P>,
    hash: TxHash,
}

impl<P: Eip1193Provider + ?Sized> PendingMint<'_, '_, P> {
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Checks once for the receipt. `Ok(None)` means the transaction is still pending.
    pub async fn poll_receipt(&self) -> Result<Option<TransactionReceipt>, EthereumServiceError> {
        let Some(receipt) = self.contract.client.transaction_receipt(self.hash).await? else {
            return Ok(None);
        };
        if !receipt.succeeded() {
            return Err(EthereumServiceError::TransactionReverted(self.hash));
        }
        Ok(Some(receipt))
    }
}
