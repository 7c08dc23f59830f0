// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{config::MintConfig, state::MintState};

/// The page the controller drives.
pub trait UserInterface {
    /// Shows a blocking message to the user.
    fn alert(&self, message: &str);

    /// Brings the page up to date with `view`.
    fn render(&self, view: &MintView<'_>);
}

/// The rendered form of a [`MintState`].
pub struct MintView<'a> {
    state: &'a MintState,
    config: &'a MintConfig,
}

impl<'a> MintView<'a> {
    pub fn new(state: &'a MintState, config: &'a MintConfig) -> Self {
        Self { state, config }
    }

    pub fn show_connect_button(&self) -> bool {
        !self.state.is_connected()
    }

    pub fn show_mint_button(&self) -> bool {
        self.state.is_connected()
    }

    pub fn mint_text(&self) -> String {
        format!(
            "{}/{} minted so far!",
            self.state.minted(),
            self.config.total_mint_count
        )
    }

    pub fn collection_url(&self) -> &str {
        &self.config.collection_url
    }

    pub fn twitter_link(&self) -> String {
        self.config.twitter_link()
    }

    pub fn twitter_text(&self) -> String {
        format!("built on @{}", self.config.twitter_handle)
    }

    pub fn twitter_logo_url(&self) -> &str {
        &self.config.twitter_logo_url
    }
}
