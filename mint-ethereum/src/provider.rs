// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The EIP-1193 request interface exposed by browser wallets.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error code a wallet uses when the user declines a request.
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// The argument of `provider.request(...)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl RequestArguments {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            params: None,
        }
    }

    pub fn with_params(method: &str, params: serde_json::Value) -> Self {
        Self {
            method: method.to_string(),
            params: Some(params),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("the user rejected the request")]
    UserRejected,

    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("provider transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Builds the error matching an EIP-1193 `{ code, message }` error object.
    pub fn from_code(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_REQUEST {
            return ProviderError::UserRejected;
        }
        ProviderError::Rpc {
            code,
            message: message.into(),
        }
    }
}

/// An injected wallet provider.
///
/// Providers live on the single UI thread, so the returned futures are not `Send`.
#[async_trait(?Send)]
pub trait Eip1193Provider {
    async fn request(
        &self,
        arguments: RequestArguments,
    ) -> Result<serde_json::Value, ProviderError>;
}

#[async_trait(?Send)]
impl<P: Eip1193Provider + ?Sized> Eip1193Provider for std::rc::Rc<P> {
    async fn request(
        &self,
        arguments: RequestArguments,
    ) -> Result<serde_json::Value, ProviderError> {
        (**self).request(arguments).await
    }
}
