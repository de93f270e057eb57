//! Typed bounded channels with an explicit open/closed protocol.
//!
//! This module provides the sender and receiver halves used by every
//! coordination pattern in the crate. A channel is created with a fixed
//! capacity: zero makes it a synchronous rendezvous (send and receive must
//! meet), any other value a FIFO buffer of that many slots. Blocking on a
//! full buffer is the crate's backpressure mechanism.

mod receiver;
mod sender;

pub use receiver::Receiver;
pub use sender::Sender;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Channel state as seen through the explicit close protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// Channel is open and operational.
    Open,

    /// Channel was closed but buffered values remain to be drained.
    Closing,

    /// Channel is closed and drained.
    Closed,
}

/// Bookkeeping shared by every endpoint of one channel.
#[derive(Debug)]
pub(crate) struct Shared {
    closed: AtomicBool,
}

impl Shared {
    pub(crate) fn new() -> Self {
        Self {
            closed: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Marks the channel closed, returning whether it already was.
    pub(crate) fn mark_closed(&self) -> bool {
        self.closed.swap(true, Ordering::AcqRel)
    }
}

/// Creates a channel with the given capacity.
///
/// Capacity 0 is a rendezvous: every send blocks until a receiver is ready
/// to take the value. Capacity N buffers up to N values; a send blocks only
/// while the buffer is full, a receive only while it is empty. Values are
/// delivered exactly once, in send order, for a single producer and a
/// single consumer.
pub fn bounded<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    let shared = Arc::new(Shared::new());
    (Sender::new(tx, shared.clone()), Receiver::new(rx, shared))
}
