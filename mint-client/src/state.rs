// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Connection {
    #[default]
    Disconnected,
    Connected { account: String },
}

/// What the page knows about the wallet and the collection.
///
/// There is no way back to `Disconnected`: revoking the page in the wallet is not detected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintState {
    connection: Connection,
    minted: u64,
}

impl MintState {
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn account(&self) -> Option<&str> {
        match &self.connection {
            Connection::Disconnected => None,
            Connection::Connected { account } => Some(account),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account().is_some()
    }

    pub fn minted(&self) -> u64 {
        self.minted
    }

    /// Adopts `account`. Returns whether the state changed.
    pub fn connect(&mut self, account: String) -> bool {
        if self.account() == Some(account.as_str()) {
            return false;
        }
        self.connection = Connection::Connected { account };
        true
    }

    pub fn set_minted(&mut self, minted: u64) -> bool {
        std::mem::replace(&mut self.minted, minted) != minted
    }
}
