// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Timers that can be used natively or on the Web.
 */

pub use std::time::Duration;

cfg_if::cfg_if! {
    if #[cfg(web)] {
        pub use wasmtimer::tokio as timer;
    } else {
        pub use tokio::time as timer;
    }
}
