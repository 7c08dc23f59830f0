// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module provides the controller behind the NFT mint page: it tracks the wallet
//! connection and the mint count, and announces minted tokens.
//!
//! Failures never interrupt the page. They are handed to an [`reporter::ErrorReporter`]
//! and otherwise ignored.

pub mod config;
pub mod controller;
pub mod environment;
mod error;
pub mod listener;
pub mod reporter;
pub mod state;
pub mod task;
pub mod time;
pub mod ui;


pub use controller::MintController;
pub use error::Error;
