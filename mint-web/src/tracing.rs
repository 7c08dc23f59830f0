// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging of the mint page to the browser console.

use tracing_subscriber::{
    filter::EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::__tracing_subscriber_SubscriberExt as _,
    util::SubscriberInitExt as _,
};

/// The page's own crates log their internals; everything else only logs warnings.
const DIRECTIVES: &str = "warn,mint_client=debug,mint_ethereum=info,mint_web=debug";

/// Installs the console subscriber.
///
/// Each controller operation is a span. Its closing line in the console carries the time
/// it took, and the same timing is recorded with the [Performance
/// API](https://developer.mozilla.org/en-US/docs/Web/API/Performance).
pub fn init() {
    let console = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    let timings =
        tracing_web::performance_layer().with_details_from_fields(fmt::format::Pretty::default());

    if tracing_subscriber::registry()
        .with(EnvFilter::new(DIRECTIVES))
        .with(console)
        .with(timings)
        .try_init()
        .is_err()
    {
        tracing::debug!("a subscriber is already installed");
    }
}
