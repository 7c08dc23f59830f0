// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# `mint-web`

This module defines the browser front-end of the NFT mint page.

It is compiled to Wasm and mounted by a small JavaScript loader (see `www/index.html`).
The page talks to the wallet the browser extension injects as `window.ethereum`; when
there is none, the page still renders and asks the user to install a wallet on connect.
*/

// We sometimes need functions in this module to be async in order to
// ensure the generated code will return a `Promise`.
#![allow(clippy::unused_async)]

pub mod page;
pub mod provider;
mod tracing;

use mint_client::{config::MintConfig, environment};
use wasm_bindgen::prelude::*;

use crate::{page::Page, provider::Ethereum};

type WebEnvironment = environment::Impl<Ethereum, Page>;

type JsResult<T> = Result<T, JsError>;

/// The mint page, mounted in a root element.
#[wasm_bindgen]
#[derive(Clone)]
pub struct App {
    controller: mint_client::MintController<WebEnvironment>,
}

#[wasm_bindgen]
impl App {
    /// Builds the page inside the element `root_id`.
    ///
    /// `options` may override any field of the default configuration, e.g.
    /// `{ contractAddress, expectedChainId, networkName }`.
    ///
    /// # Errors
    /// If the options object is of the wrong form or the root element is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str, options: JsValue) -> JsResult<App> {
        let config: MintConfig = if options.is_undefined() || options.is_null() {
            MintConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let root = window
            .document()
            .and_then(|document| document.get_element_by_id(root_id))
            .ok_or_else(|| JsError::new(&format!("no element with id `{root_id}`")))?;
        let page = Page::build(window, &root, &config)
            .map_err(|error| JsError::new(&format!("failed to build the page: {error:?}")))?;

        let provider = provider::injected();
        if provider.is_none() {
            ::tracing::info!("no wallet provider injected");
        }
        let controller = mint_client::MintController::new(
            WebEnvironment::new(provider, page.clone()),
            config,
        );
        page.bind(&controller);
        Ok(App { controller })
    }

    /// Checks for an authorized account and fetches the mint count.
    #[wasm_bindgen]
    pub async fn load(&self) {
        self.controller.load().await;
    }

    #[wasm_bindgen(js_name = connectWallet)]
    pub async fn connect_wallet(&self) {
        self.controller.connect_wallet().await;
    }

    /// Mints a token and resolves to the transaction hash once it is mined.
    #[wasm_bindgen]
    pub async fn mint(&self) -> Option<String> {
        self.controller
            .invoke_mint()
            .await
            .map(|hash| format!("{hash:?}"))
    }

    /// Stops announcing minted tokens.
    #[wasm_bindgen]
    pub fn unsubscribe(&self) {
        self.controller.unsubscribe();
    }

    /// The current state, as `{ connection, minted }`.
    ///
    /// # Errors
    /// If the state cannot be converted to a JavaScript value.
    #[wasm_bindgen]
    pub fn state(&self) -> JsResult<JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.controller.state())?)
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    tracing::init();
}
