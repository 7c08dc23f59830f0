// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::Error;

/// The controller operations whose failures are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CheckExistingConnection,
    FetchCurrentMintCount,
    ConnectWallet,
    PollMintEvents,
    InvokeMint,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CheckExistingConnection => "check existing connection",
            Operation::FetchCurrentMintCount => "fetch current mint count",
            Operation::ConnectWallet => "connect wallet",
            Operation::PollMintEvents => "poll mint events",
            Operation::InvokeMint => "invoke mint",
        };
        f.write_str(name)
    }
}

/// Receives every failure the controller swallows.
///
/// Failures are not surfaced to the user: the page keeps working and only the reporter
/// hears about them.
pub trait ErrorReporter {
    fn report(&self, operation: Operation, error: &Error);
}

/// Logs failures to the console.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: Operation, error: &Error) {
        tracing::error!(%operation, %error, "operation failed");
    }
}
