// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The long-lived listener for `NewEpicNFTMinted` events.

use futures::FutureExt as _;
use mint_ethereum::contract::{MintContract, MintedEvent};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    controller::MintController,
    environment::Environment,
    reporter::{ErrorReporter as _, Operation},
    time::timer,
    ui::UserInterface as _,
    Error,
};

/// A handle on a running mint-event listener.
///
/// Dropping the handle leaves the listener running; it stops only once [`cancel`] is
/// called on this handle or one of its clones.
///
/// [`cancel`]: Subscription::cancel
#[derive(Clone, Debug, Default)]
pub struct Subscription {
    token: CancellationToken,
}

impl Subscription {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

pub(crate) struct MintListener<E: Environment> {
    controller: MintController<E>,
    token: CancellationToken,
    /// The first block not yet inspected. `None` until the starting block is known.
    next_block: Option<u64>,
    /// Whether a poll failed before the starting block was known.
    missed_start: bool,
}

impl<E: Environment> MintListener<E> {
    pub(crate) fn new(controller: MintController<E>) -> (Self, Subscription) {
        let subscription = Subscription::default();
        let listener = Self {
            controller,
            token: subscription.token.clone(),
            next_block: None,
            missed_start: false,
        };
        (listener, subscription)
    }

    /// Polls for new events until cancelled. Every event is announced exactly once.
    pub(crate) async fn run(mut self) {
        let interval = self.controller.config().event_poll_interval();
        loop {
            if self.token.is_cancelled() {
                break;
            }
            if let Err(error) = self.poll().await {
                self.missed_start |= self.next_block.is_none();
                self.controller
                    .environment()
                    .reporter()
                    .report(Operation::PollMintEvents, &error);
            }
            futures::select! {
                () = self.token.cancelled().fuse() => break,
                () = timer::sleep(interval).fuse() => {}
            }
        }
        debug!("mint event listener stopped");
    }

    async fn poll(&mut self) -> Result<(), Error> {
        let provider = self
            .controller
            .environment()
            .provider()
            .ok_or(Error::MissingProvider)?;
        let contract = MintContract::new(self.controller.config().contract_address, provider);
        let latest = contract.client().block_number().await?;
        let from_block = match self.next_block {
            Some(from_block) => from_block,
            // A poll failed before the head was known: inspect the head instead of skipping it.
            None if self.missed_start => {
                debug!(latest, "mint event listener starting late");
                self.next_block = Some(latest);
                latest
            }
            None => {
                debug!(latest, "mint event listener starting");
                self.next_block = Some(latest + 1);
                return Ok(());
            }
        };
        if latest < from_block {
            return Ok(());
        }
        let events = contract.minted_events(from_block, latest).await?;
        self.next_block = Some(latest + 1);
        for event in events {
            if self.token.is_cancelled() {
                break;
            }
            self.announce(&event);
        }
        Ok(())
    }

    fn announce(&self, event: &MintedEvent) {
        info!(sender = %event.sender, token_id = %event.token_id, "NFT minted");
        let message = self.controller.config().minted_message(event.token_id);
        self.controller.environment().ui().alert(&message);
    }
}
