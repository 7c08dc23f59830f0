// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{TxHash, U64};
use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Debug, Error)]
pub enum EthereumServiceError {
    /// The wallet provider rejected or failed the request
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// `serde_json` error
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// The provider answered with a value of the wrong shape
    #[error("unexpected response to {method}: {response}")]
    UnexpectedResponse {
        method: &'static str,
        response: String,
    },

    /// ABI decoding error
    #[error(transparent)]
    AbiError(#[from] alloy_sol_types::Error),

    #[error("Event parsing error")]
    EventParsingError,

    #[error("value {0} does not fit in 64 bits")]
    Overflow(String),

    #[error("transaction {0:?} was reverted")]
    TransactionReverted(TxHash),
}

/// Parses a JSON-RPC hex quantity such as `"0x4"`.
pub fn parse_quantity(
    method: &'static str,
    value: serde_json::Value,
) -> Result<u64, EthereumServiceError> {
    let quantity = serde_json::from_value::<U64>(value.clone()).map_err(|_| {
        EthereumServiceError::UnexpectedResponse {
            method,
            response: value.to_string(),
        }
    })?;
    Ok(quantity.to::<u64>())
}

/// Formats a block number as a JSON-RPC hex quantity.
pub fn format_quantity(value: u64) -> String {
    format!("{:#x}", value)
}
