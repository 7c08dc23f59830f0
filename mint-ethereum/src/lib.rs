// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module provides functionalities for talking to an Ethereum wallet provider and
//! to the NFT mint contract behind it.

#![allow(async_fn_in_trait)]

pub mod client;
pub mod common;
pub mod contract;
pub mod provider;

/// Helper types for tests.
#[cfg(any(test, feature = "test"))]
pub mod test_utils;
