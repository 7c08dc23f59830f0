// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The DOM of the mint page.

use mint_client::{
    config::MintConfig,
    environment::Environment,
    state::MintState,
    ui::{MintView, UserInterface},
    MintController,
};
use wasm_bindgen::{prelude::*, JsCast as _};
use web_sys::{Document, Element, HtmlElement, Window};

/// The elements of the page that change with the state.
#[derive(Clone)]
pub struct Page {
    window: Window,
    connect_button: HtmlElement,
    mint_button: HtmlElement,
    mint_count: HtmlElement,
}

fn element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    element.set_class_name(class);
    Ok(element)
}

fn text(document: &Document, tag: &str, class: &str, text: &str) -> Result<HtmlElement, JsValue> {
    let element = element(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

fn external_link(document: &Document, class: &str, href: &str) -> Result<HtmlElement, JsValue> {
    let link = element(document, "a", class)?;
    link.set_attribute("href", href)?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noreferrer")?;
    Ok(link)
}

impl Page {
    /// Builds the page inside `root`, replacing its content.
    pub fn build(window: Window, root: &Element, config: &MintConfig) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("the window has no document"))?;
        root.set_inner_html("");
        let state = MintState::default();
        let view = MintView::new(&state, config);

        let app = element(&document, "div", "App")?;
        let container = element(&document, "div", "container")?;
        let header = element(&document, "div", "header-container")?;
        header.append_child(&text(&document, "p", "header gradient-text", "My NFT Collection")?.into())?;
        header.append_child(&text(
            &document,
            "p",
            "sub-text",
            "Each unique. Each beautiful. Discover your NFT today.",
        )?.into())?;

        let connect_button = text(
            &document,
            "button",
            "cta-button connect-wallet-button",
            "Connect to Wallet",
        )?;
        let mint_button = text(&document, "button", "cta-button mint-button", "Mint NFT")?;
        mint_button.set_hidden(true);
        header.append_child(&connect_button)?;
        header.append_child(&mint_button)?;
        header.append_child(&document.create_element("br")?.into())?;

        let mint_count = element(&document, "p", "mint-count")?;
        header.append_child(&mint_count)?;
        header.append_child(&document.create_element("br")?.into())?;

        let collection = external_link(&document, "", view.collection_url())?;
        collection.append_child(&text(
            &document,
            "button",
            "cta-button opensea-button",
            "🌊 View Collection on OpenSea",
        )?.into())?;
        header.append_child(&collection)?;

        let footer = element(&document, "div", "footer-container")?;
        let logo = element(&document, "img", "twitter-logo")?;
        logo.set_attribute("alt", "Twitter Logo")?;
        logo.set_attribute("src", view.twitter_logo_url())?;
        footer.append_child(&logo)?;
        let twitter = external_link(&document, "footer-text", &view.twitter_link())?;
        twitter.set_text_content(Some(&view.twitter_text()));
        footer.append_child(&twitter)?;

        container.append_child(&header)?;
        container.append_child(&footer)?;
        app.append_child(&container)?;
        root.append_child(&app)?;

        Ok(Self {
            window,
            connect_button,
            mint_button,
            mint_count,
        })
    }

    /// Dispatches the button clicks to `controller`.
    pub fn bind<E: Environment>(&self, controller: &MintController<E>) {
        let connect = controller.clone();
        on_click(&self.connect_button, move || {
            let controller = connect.clone();
            wasm_bindgen_futures::spawn_local(async move { controller.connect_wallet().await });
        });
        let mint = controller.clone();
        on_click(&self.mint_button, move || {
            let controller = mint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.invoke_mint().await;
            });
        });
    }
}

fn on_click(element: &HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(move || handler());
    element.set_onclick(Some(closure.as_ref().unchecked_ref()));
    // The buttons live as long as the page.
    closure.forget();
}

impl UserInterface for Page {
    fn alert(&self, message: &str) {
        if let Err(error) = self.window.alert_with_message(message) {
            tracing::warn!(?error, "failed to show an alert");
        }
    }

    fn render(&self, view: &MintView<'_>) {
        self.connect_button.set_hidden(!view.show_connect_button());
        self.mint_button.set_hidden(!view.show_mint_button());
        self.mint_count.set_text_content(Some(&view.mint_text()));
    }
}
