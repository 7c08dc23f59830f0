// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Spawning of local tasks, natively or on the Web.

The controller only ever runs on one thread, so tasks are never required to be `Send`.
 */

use std::future::Future;

/// Spawns a task on the current thread.
///
/// Natively, this must be called from within a `tokio::task::LocalSet`.
#[cfg(not(web))]
pub fn spawn_local<F: Future<Output = ()> + 'static>(future: F) {
    drop(tokio::task::spawn_local(future));
}

/// Spawns a task on the browser's task queue.
#[cfg(web)]
pub fn spawn_local<F: Future<Output = ()> + 'static>(future: F) {
    wasm_bindgen_futures::spawn_local(future);
}
