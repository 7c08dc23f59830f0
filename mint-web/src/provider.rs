// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The wallet provider injected by the browser extension as `window.ethereum`.

use async_trait::async_trait;
use mint_ethereum::provider::{Eip1193Provider, ProviderError, RequestArguments};
use serde::{Deserialize, Serialize as _};
use wasm_bindgen::{prelude::*, JsCast as _};

#[wasm_bindgen(typescript_custom_section)]
const ETHEREUM_PROVIDER_INTERFACE: &'static str = r#"
export interface EthereumProvider {
  request(arguments: { method: string, params?: unknown[] }): Promise<unknown>;
}"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "EthereumProvider")]
    pub type Ethereum;

    #[wasm_bindgen(catch, method, js_name = request)]
    async fn send_request(this: &Ethereum, arguments: JsValue) -> Result<JsValue, JsValue>;
}

/// Returns the provider injected into the page, if there is one.
pub fn injected() -> Option<Ethereum> {
    let window = web_sys::window()?;
    let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return None;
    }
    Some(ethereum.unchecked_into())
}

/// The error object EIP-1193 providers reject with.
#[derive(Deserialize)]
struct JsProviderError {
    code: i64,
    message: String,
}

fn provider_error(value: JsValue) -> ProviderError {
    match serde_wasm_bindgen::from_value::<JsProviderError>(value.clone()) {
        Ok(JsProviderError { code, message }) => ProviderError::from_code(code, message),
        Err(_) => ProviderError::Transport(format!("{value:?}")),
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for Ethereum {
    async fn request(
        &self,
        arguments: RequestArguments,
    ) -> Result<serde_json::Value, ProviderError> {
        tracing::trace!(method = %arguments.method, "provider request");
        let arguments = arguments
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|error| ProviderError::Transport(error.to_string()))?;
        let response = self.send_request(arguments).await.map_err(provider_error)?;
        if response.is_undefined() {
            return Ok(serde_json::Value::Null);
        }
        serde_wasm_bindgen::from_value(response)
            .map_err(|error| ProviderError::Transport(error.to_string()))
    }
}
