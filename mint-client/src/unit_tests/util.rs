// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, future::Future, rc::Rc};

use mint_ethereum::test_utils::FakeProvider;

use crate::{
    config::MintConfig,
    environment::Impl,
    reporter::{ErrorReporter, Operation},
    time::Duration,
    ui::{MintView, UserInterface},
    Error, MintController,
};

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a render call showed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub connect_button: bool,
    pub mint_button: bool,
    pub mint_text: String,
}

#[derive(Default)]
struct Page {
    alerts: Vec<String>,
    renders: Vec<Rendered>,
}

#[derive(Clone, Default)]
pub struct RecordingUi(Rc<RefCell<Page>>);

impl RecordingUi {
    pub fn alerts(&self) -> Vec<String> {
        self.0.borrow().alerts.clone()
    }

    pub fn last_render(&self) -> Option<Rendered> {
        self.0.borrow().renders.last().cloned()
    }
}

impl UserInterface for RecordingUi {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().alerts.push(message.to_string());
    }

    fn render(&self, view: &MintView<'_>) {
        self.0.borrow_mut().renders.push(Rendered {
            connect_button: view.show_connect_button(),
            mint_button: view.show_mint_button(),
            mint_text: view.mint_text(),
        });
    }
}

#[derive(Clone, Default)]
pub struct RecordingReporter(Rc<RefCell<Vec<(Operation, String)>>>);

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(Operation, String)> {
        self.0.borrow().clone()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.reports()
            .into_iter()
            .map(|(operation, _)| operation)
            .collect()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, operation: Operation, error: &Error) {
        self.0.borrow_mut().push((operation, error.to_string()));
    }
}

pub type TestEnvironment = Impl<FakeProvider, RecordingUi, RecordingReporter>;

pub struct TestPage {
    pub controller: MintController<TestEnvironment>,
    pub ui: RecordingUi,
    pub reporter: RecordingReporter,
}

pub fn test_config() -> MintConfig {
    MintConfig {
        event_poll_interval_ms: POLL_INTERVAL.as_millis() as u64,
        confirmation_poll_interval_ms: POLL_INTERVAL.as_millis() as u64,
        ..MintConfig::default()
    }
}

pub fn make_page(provider: Option<FakeProvider>) -> TestPage {
    let ui = RecordingUi::default();
    let reporter = RecordingReporter::default();
    let environment = Impl {
        provider,
        ui: ui.clone(),
        reporter: reporter.clone(),
    };
    TestPage {
        controller: MintController::new(environment, test_config()),
        ui,
        reporter,
    }
}

/// Runs `future` inside a `LocalSet`, so that the controller can spawn its listener.
pub async fn run_local<F: Future>(future: F) -> F::Output {
    tokio::task::LocalSet::new().run_until(future).await
}
