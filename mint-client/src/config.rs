// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{address, Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::time::Duration;

/// The deployed `MyEpicNFT` contract on Rinkeby.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("62bfdE938293C56A309CB9d9f0e6B6265fE510Fa");

/// Rinkeby.
pub const DEFAULT_CHAIN_ID: u64 = 4;

/// Settings of the mint page. Every field can be omitted and falls back to the deployed
/// collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MintConfig {
    pub contract_address: Address,
    /// The chain the user is warned to switch to if the wallet is elsewhere.
    pub expected_chain_id: u64,
    pub network_name: String,
    pub opensea_assets_url: String,
    pub collection_url: String,
    pub explorer_tx_url: String,
    pub twitter_handle: String,
    /// The image shown next to the footer link.
    pub twitter_logo_url: String,
    pub total_mint_count: u64,
    pub event_poll_interval_ms: u64,
    pub confirmation_poll_interval_ms: u64,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            expected_chain_id: DEFAULT_CHAIN_ID,
            network_name: "Rinkeby Test Network".to_string(),
            opensea_assets_url: "https://testnets.opensea.io/assets".to_string(),
            collection_url: "https://testnets.opensea.io/collection/squarenft-qel2uw0nir"
                .to_string(),
            explorer_tx_url: "https://rinkeby.etherscan.io/tx".to_string(),
            twitter_handle: "jwross24".to_string(),
            twitter_logo_url: "assets/twitter-logo.svg".to_string(),
            total_mint_count: 50,
            event_poll_interval_ms: 4000,
            confirmation_poll_interval_ms: 4000,
        }
    }
}

impl MintConfig {
    pub fn event_poll_interval(&self) -> Duration {
        Duration::from_millis(self.event_poll_interval_ms)
    }

    pub fn confirmation_poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirmation_poll_interval_ms)
    }

    /// The marketplace page of a minted token.
    pub fn asset_link(&self, token_id: U256) -> String {
        format!(
            "{}/{}/{}",
            self.opensea_assets_url.trim_end_matches('/'),
            self.contract_address.to_checksum(None),
            token_id
        )
    }

    pub fn transaction_link(&self, hash: TxHash) -> String {
        format!("{}/{:?}", self.explorer_tx_url.trim_end_matches('/'), hash)
    }

    pub fn twitter_link(&self) -> String {
        format!("https://twitter.com/{}", self.twitter_handle)
    }

    pub fn minted_message(&self, token_id: U256) -> String {
        format!(
            "Hey there! We've minted your NFT and sent it to your wallet. It may be blank right \
             now. It can take a maximum of 10 minutes to show up on OpenSea. Here's the link: {}",
            self.asset_link(token_id)
        )
    }

    pub fn wrong_network_message(&self) -> String {
        format!("You are not connected to the {}!", self.network_name)
    }

    pub fn install_wallet_message(&self) -> &'static str {
        "Get MetaMask!"
    }
}
