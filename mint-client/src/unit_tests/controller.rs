// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use mint_ethereum::{
    provider::ProviderError,
    test_utils::{quantity, receipt_response, total_minted_response, tx_hash, FakeProvider},
};
use serde_json::json;

use super::util::{make_page, run_local, TestPage, POLL_INTERVAL};
use crate::{
    reporter::Operation,
    state::{Connection, MintState},
    Error,
};

/// A wallet on the expected chain whose listener never sees new blocks.
fn wallet() -> FakeProvider {
    let provider = FakeProvider::new();
    provider
        .respond_always("eth_chainId", json!("0x4"))
        .respond_always("eth_blockNumber", quantity(1))
        .respond_always("eth_getLogs", json!([]));
    provider
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_load_without_provider() {
    run_local(async {
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(None);
        controller.load().await;

        assert_eq!(controller.state(), MintState::default());
        assert!(controller.subscription().is_none());
        assert!(ui.alerts().is_empty());
        assert!(reporter.reports().is_empty());
        let rendered = ui.last_render().unwrap();
        assert!(rendered.connect_button);
        assert!(!rendered.mint_button);
        assert_eq!(rendered.mint_text, "0/50 minted so far!");
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_load_with_pre_authorized_account() {
    run_local(async {
        let provider = wallet();
        provider
            .respond("eth_accounts", json!(["0xabc"]))
            .respond("eth_call", total_minted_response(3));
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(Some(provider.clone()));
        controller.load().await;

        assert_eq!(controller.state().account(), Some("0xabc"));
        assert_eq!(controller.state().minted(), 3);
        assert!(ui.alerts().is_empty());
        assert!(reporter.reports().is_empty());
        let rendered = ui.last_render().unwrap();
        assert!(!rendered.connect_button);
        assert!(rendered.mint_button);
        assert_eq!(provider.count("eth_requestAccounts"), 0);

        // Exactly one listener polls the chain: once on start, then once per interval.
        let subscription = controller.subscription().expect("listener should be registered");
        tokio::time::sleep(POLL_INTERVAL * 3 + POLL_INTERVAL / 2).await;
        assert_eq!(provider.count("eth_blockNumber"), 4);
        let again = controller.register_mint_event_listener().unwrap();
        again.cancel();
        assert!(subscription.is_cancelled());
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_load_without_authorized_account() {
    run_local(async {
        let provider = wallet();
        provider
            .respond("eth_accounts", json!([]))
            .respond("eth_call", total_minted_response(0));
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(Some(provider.clone()));
        controller.load().await;

        assert_eq!(controller.state().connection(), &Connection::Disconnected);
        assert!(controller.subscription().is_none());
        assert!(ui.last_render().unwrap().connect_button);
        assert!(reporter.reports().is_empty());
        assert_eq!(provider.count("eth_blockNumber"), 0);
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_wrong_network_warns_but_connects() {
    run_local(async {
        let provider = wallet();
        provider
            .respond("eth_chainId", json!("0x1"))
            .respond("eth_accounts", json!(["0xabc"]));
        let TestPage { controller, ui, .. } = make_page(Some(provider));
        controller.check_existing_connection().await;

        assert_eq!(
            ui.alerts(),
            ["You are not connected to the Rinkeby Test Network!"]
        );
        assert_eq!(controller.state().account(), Some("0xabc"));
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_connect_without_provider() {
    run_local(async {
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(None);
        controller.connect_wallet().await;

        assert_eq!(ui.alerts(), ["Get MetaMask!"]);
        assert_eq!(controller.state(), MintState::default());
        assert!(controller.subscription().is_none());
        assert!(reporter.reports().is_empty());
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_connect_wallet() {
    run_local(async {
        let provider = wallet();
        provider.respond("eth_requestAccounts", json!(["0xABC"]));
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(Some(provider));
        controller.render();
        assert!(ui.last_render().unwrap().connect_button);

        controller.connect_wallet().await;

        assert_eq!(
            controller.state().connection(),
            &Connection::Connected {
                account: "0xABC".to_string()
            }
        );
        let rendered = ui.last_render().unwrap();
        assert!(!rendered.connect_button);
        assert!(rendered.mint_button);
        assert!(controller.subscription().is_some());
        assert!(ui.alerts().is_empty());
        assert!(reporter.reports().is_empty());
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_connect_rejected_by_user() {
    run_local(async {
        let provider = wallet();
        provider.fail("eth_requestAccounts", ProviderError::UserRejected);
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(Some(provider));
        controller.connect_wallet().await;

        assert!(!controller.state().is_connected());
        assert!(controller.subscription().is_none());
        assert!(ui.alerts().is_empty());
        assert_eq!(reporter.operations(), [Operation::ConnectWallet]);
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_connect_without_accounts() {
    run_local(async {
        let provider = wallet();
        provider.respond("eth_requestAccounts", json!([]));
        let TestPage {
            controller,
            reporter,
            ..
        } = make_page(Some(provider));
        controller.connect_wallet().await;

        assert!(!controller.state().is_connected());
        assert_eq!(
            reporter.reports(),
            [(Operation::ConnectWallet, Error::NoAccounts.to_string())]
        );
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_fetch_mint_count() {
    run_local(async {
        let provider = wallet();
        provider.respond("eth_call", total_minted_response(12));
        let TestPage { controller, ui, .. } = make_page(Some(provider));
        controller.fetch_current_mint_count().await;

        assert_eq!(controller.state().minted(), 12);
        assert_eq!(ui.last_render().unwrap().mint_text, "12/50 minted so far!");
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_fetch_mint_count_failure_keeps_count() {
    run_local(async {
        let provider = wallet();
        provider
            .respond("eth_accounts", json!([]))
            .fail(
                "eth_call",
                ProviderError::from_code(-32000, "execution reverted"),
            );
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(Some(provider));
        controller.load().await;

        assert_eq!(controller.state().minted(), 0);
        assert_eq!(ui.last_render().unwrap().mint_text, "0/50 minted so far!");
        assert!(ui.alerts().is_empty());
        assert_eq!(reporter.operations(), [Operation::FetchCurrentMintCount]);
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_invoke_mint() {
    run_local(async {
        let provider = wallet();
        let hash = tx_hash(0x42);
        provider
            .respond("eth_requestAccounts", json!(["0xabc"]))
            .respond("eth_sendTransaction", json!(hash))
            .respond("eth_getTransactionReceipt", json!(null))
            .respond("eth_getTransactionReceipt", receipt_response(hash, 2, true));
        let TestPage {
            controller,
            reporter,
            ..
        } = make_page(Some(provider.clone()));
        controller.connect_wallet().await;

        assert_eq!(controller.invoke_mint().await, Some(hash));
        assert!(reporter.reports().is_empty());
        assert_eq!(provider.count("eth_getTransactionReceipt"), 2);
        let sent = provider.calls_to("eth_sendTransaction");
        assert_eq!(sent.len(), 1);
        let transaction = &sent[0].params.as_ref().unwrap()[0];
        assert_eq!(transaction["from"], json!("0xabc"));
        assert_eq!(
            transaction["to"],
            json!(controller.config().contract_address)
        );
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_invoke_mint_requires_connection() {
    run_local(async {
        let provider = wallet();
        let TestPage {
            controller,
            reporter,
            ..
        } = make_page(Some(provider.clone()));

        assert_eq!(controller.invoke_mint().await, None);
        assert_eq!(
            reporter.reports(),
            [(Operation::InvokeMint, Error::NotConnected.to_string())]
        );
        assert_eq!(provider.count("eth_sendTransaction"), 0);
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_reverted_mint_is_reported() {
    run_local(async {
        let provider = wallet();
        let hash = tx_hash(0x43);
        provider
            .respond("eth_requestAccounts", json!(["0xabc"]))
            .respond("eth_sendTransaction", json!(hash))
            .respond("eth_getTransactionReceipt", receipt_response(hash, 2, false));
        let TestPage {
            controller,
            ui,
            reporter,
        } = make_page(Some(provider));
        controller.connect_wallet().await;

        assert_eq!(controller.invoke_mint().await, None);
        assert_eq!(reporter.operations(), [Operation::InvokeMint]);
        assert!(ui.alerts().is_empty());
    })
    .await
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_rejected_mint_is_not_retried() {
    run_local(async {
        let provider = wallet();
        provider
            .respond("eth_requestAccounts", json!(["0xabc"]))
            .fail("eth_sendTransaction", ProviderError::UserRejected);
        let TestPage {
            controller,
            reporter,
            ..
        } = make_page(Some(provider.clone()));
        controller.connect_wallet().await;

        assert_eq!(controller.invoke_mint().await, None);
        assert_eq!(provider.count("eth_sendTransaction"), 1);
        assert_eq!(reporter.operations(), [Operation::InvokeMint]);
    })
    .await
}
