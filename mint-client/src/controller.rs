// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use alloy_primitives::TxHash;
use mint_ethereum::{client::WalletClient, contract::MintContract};
use tracing::{debug, info, instrument};

use crate::{
    config::MintConfig,
    environment::Environment,
    listener::{MintListener, Subscription},
    reporter::{ErrorReporter as _, Operation},
    state::MintState,
    task,
    time::timer,
    ui::{MintView, UserInterface as _},
    Error,
};

/// Mediates between the user, the injected wallet and the mint contract.
///
/// Clones share the same state. All operations run on one thread, and no borrow of the
/// state is held across an `await`.
pub struct MintController<E: Environment> {
    inner: Rc<Inner<E>>,
}

struct Inner<E> {
    environment: E,
    config: MintConfig,
    state: RefCell<MintState>,
    subscription: RefCell<Option<Subscription>>,
}

impl<E: Environment> Clone for MintController<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: Environment> MintController<E> {
    pub fn new(environment: E, config: MintConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                environment,
                config,
                state: RefCell::new(MintState::default()),
                subscription: RefCell::new(None),
            }),
        }
    }

    pub fn environment(&self) -> &E {
        &self.inner.environment
    }

    pub fn config(&self) -> &MintConfig {
        &self.inner.config
    }

    pub fn state(&self) -> MintState {
        self.inner.state.borrow().clone()
    }

    /// The subscription registered by the last successful connection, if any.
    pub fn subscription(&self) -> Option<Subscription> {
        self.inner.subscription.borrow().clone()
    }

    /// Renders the current state.
    pub fn render(&self) {
        let state = self.inner.state.borrow();
        let view = MintView::new(&state, &self.inner.config);
        self.environment().ui().render(&view);
    }

    fn update(&self, change: impl FnOnce(&mut MintState) -> bool) {
        let changed = change(&mut self.inner.state.borrow_mut());
        if changed {
            self.render();
        }
    }

    fn report(&self, operation: Operation, error: &Error) {
        self.environment().reporter().report(operation, error);
    }

    fn contract(&self) -> Option<MintContract<'_, E::Provider>> {
        let provider = self.environment().provider()?;
        Some(MintContract::new(self.inner.config.contract_address, provider))
    }

    /// Runs the page-load operations. They are independent of each other.
    pub async fn load(&self) {
        self.render();
        futures::join!(
            self.check_existing_connection(),
            self.fetch_current_mint_count()
        );
    }

    /// Adopts an account the user authorized on an earlier visit.
    #[instrument(level = "debug", skip(self))]
    pub async fn check_existing_connection(&self) {
        if let Err(error) = self.try_check_existing_connection().await {
            self.report(Operation::CheckExistingConnection, &error);
        }
    }

    async fn try_check_existing_connection(&self) -> Result<(), Error> {
        let Some(provider) = self.environment().provider() else {
            info!("Make sure you have MetaMask!");
            return Ok(());
        };
        debug!("we have the Ethereum provider");
        let client = WalletClient::new(provider);

        let chain_id = client.chain_id().await?;
        info!(chain_id, "connected to chain");
        if chain_id != self.inner.config.expected_chain_id {
            let message = self.inner.config.wrong_network_message();
            self.environment().ui().alert(&message);
        }

        let accounts = client.accounts().await?;
        let Some(account) = accounts.into_iter().next() else {
            info!("no authorized account found");
            return Ok(());
        };
        info!(%account, "found an authorized account");
        self.adopt(account);
        Ok(())
    }

    /// Refreshes the mint count from the contract. The count is kept on failure.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_current_mint_count(&self) {
        if let Err(error) = self.try_fetch_current_mint_count().await {
            self.report(Operation::FetchCurrentMintCount, &error);
        }
    }

    async fn try_fetch_current_mint_count(&self) -> Result<(), Error> {
        let Some(contract) = self.contract() else {
            info!("Ethereum object doesn't exist!");
            return Ok(());
        };
        let minted = contract.total_minted().await?;
        debug!(minted, "fetched the mint count");
        self.update(|state| state.set_minted(minted));
        Ok(())
    }

    /// Asks the wallet to authorize the page.
    ///
    /// Without a wallet, the user is told to install one.
    #[instrument(level = "debug", skip(self))]
    pub async fn connect_wallet(&self) {
        if let Err(error) = self.try_connect_wallet().await {
            self.report(Operation::ConnectWallet, &error);
        }
    }

    async fn try_connect_wallet(&self) -> Result<(), Error> {
        let Some(provider) = self.environment().provider() else {
            let message = self.inner.config.install_wallet_message();
            self.environment().ui().alert(message);
            return Ok(());
        };
        let accounts = WalletClient::new(provider).request_accounts().await?;
        let account = accounts.into_iter().next().ok_or(Error::NoAccounts)?;
        info!(%account, "connected");
        self.adopt(account);
        Ok(())
    }

    fn adopt(&self, account: String) {
        self.update(|state| state.connect(account));
        self.register_mint_event_listener();
    }

    /// Starts announcing minted tokens, unless a listener is already running.
    pub fn register_mint_event_listener(&self) -> Option<Subscription> {
        if self.environment().provider().is_none() {
            info!("Ethereum object doesn't exist!");
            return None;
        }
        if let Some(subscription) = self.subscription().filter(|s| !s.is_cancelled()) {
            debug!("mint event listener already registered");
            return Some(subscription);
        }
        let (listener, subscription) = MintListener::new(self.clone());
        task::spawn_local(listener.run());
        *self.inner.subscription.borrow_mut() = Some(subscription.clone());
        debug!("mint event listener registered");
        Some(subscription)
    }

    /// Stops the mint event listener, if one is running.
    pub fn unsubscribe(&self) {
        if let Some(subscription) = self.inner.subscription.borrow_mut().take() {
            subscription.cancel();
        }
    }

    /// Mints a token to the connected account and waits until it is mined.
    ///
    /// Returns the transaction hash once confirmed.
    #[instrument(level = "debug", skip(self))]
    pub async fn invoke_mint(&self) -> Option<TxHash> {
        match self.try_invoke_mint().await {
            Ok(hash) => Some(hash),
            Err(error) => {
                self.report(Operation::InvokeMint, &error);
                None
            }
        }
    }

    async fn try_invoke_mint(&self) -> Result<TxHash, Error> {
        let account = self
            .inner
            .state
            .borrow()
            .account()
            .map(str::to_owned)
            .ok_or(Error::NotConnected)?;
        let contract = self.contract().ok_or(Error::MissingProvider)?;

        info!("Going to pop wallet now to pay gas...");
        let pending = contract.mint(&account).await?;
        info!("Mining... please wait.");
        let interval = self.inner.config.confirmation_poll_interval();
        while pending.poll_receipt().await?.is_none() {
            timer::sleep(interval).await;
        }
        let hash = pending.hash();
        info!(
            "Mined, see transaction: {}",
            self.inner.config.transaction_link(hash)
        );
        Ok(hash)
    }
}
