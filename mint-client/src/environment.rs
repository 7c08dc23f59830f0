// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use mint_ethereum::provider::Eip1193Provider;

use crate::{
    reporter::{ErrorReporter, TracingReporter},
    ui::UserInterface,
};

/// The capabilities the controller is given at construction.
pub trait Environment: 'static {
    type Provider: Eip1193Provider + 'static;
    type Ui: UserInterface + 'static;
    type Reporter: ErrorReporter + 'static;

    /// The injected wallet provider, if the page has one.
    fn provider(&self) -> Option<&Self::Provider>;
    fn ui(&self) -> &Self::Ui;
    fn reporter(&self) -> &Self::Reporter;
}

pub struct Impl<Provider, Ui, Reporter = TracingReporter> {
    pub provider: Option<Provider>,
    pub ui: Ui,
    pub reporter: Reporter,
}

impl<P, U> Impl<P, U> {
    pub fn new(provider: Option<P>, ui: U) -> Self {
        Self {
            provider,
            ui,
            reporter: TracingReporter,
        }
    }
}

impl<P, U, R> Environment for Impl<P, U, R>
where
    P: Eip1193Provider + 'static,
    U: UserInterface + 'static,
    R: ErrorReporter + 'static,
{
    type Provider = P;
    type Ui = U;
    type Reporter = R;

    fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    fn ui(&self) -> &U {
        &self.ui
    }

    fn reporter(&self) -> &R {
        &self.reporter
    }
}
