// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use mint_ethereum::common::EthereumServiceError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no wallet provider is injected into the page")]
    MissingProvider,
    #[error("the wallet did not return any account")]
    NoAccounts,
    #[error("no wallet account is connected")]
    NotConnected,
    #[error(transparent)]
    Ethereum(#[from] EthereumServiceError),
}
