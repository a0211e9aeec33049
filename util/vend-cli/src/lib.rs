//! Terminal front-end for the vending machine status poller.

pub mod transport;
pub mod terminal;

use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;

/// Ticks every `period`, starting one period from now. Ticks missed while a poll was
/// still running are dropped rather than fired back to back.
pub fn poll_ticks(period: Duration) -> impl Stream<Item = ()> {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    IntervalStream::new(interval).map(|_| ())
}
