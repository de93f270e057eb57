//! Timer channels: one-shot delays and periodic ticks.
//!
//! Timers are ordinary channels carrying the firing instant, owned by
//! whichever task created them and shared only by passing the receiver.

use std::time::{Duration, Instant};

use crate::channel::Receiver;

/// Channel that delivers a single event after `delay`, then never again.
///
/// The channel does not close after firing; a receive following the one
/// event simply blocks.
pub fn after(delay: Duration) -> Receiver<Instant> {
    Receiver::wrap(crossbeam_channel::after(delay))
}

/// Channel that delivers an event every `interval`.
///
/// At most one tick is ever pending: a consumer that falls behind skips
/// missed ticks rather than observing a burst of them.
pub fn tick(interval: Duration) -> Receiver<Instant> {
    Receiver::wrap(crossbeam_channel::tick(interval))
}
