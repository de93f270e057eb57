//! Bounded-buffer producer/consumer with close-based termination.
//!
//! The producer computes a fixed number of sequence terms, sends each in
//! strict order, then closes the channel. No count is shared with the
//! consumer; it drains the channel until the closed-and-drained signal and
//! stops. The channel capacity is the only backpressure mechanism: the
//! producer blocks whenever the buffer is full.

use log::{error, trace};

use crate::channel::{self, Receiver};
use crate::error::Result;
use crate::pool::TaskPool;
use crate::sequence::Fibonacci;

/// Spawns a producer feeding the first `count` Fibonacci terms into a
/// channel of the given capacity, closing it after the final send.
///
/// The returned receiver observes the producer's sequence exactly once
/// each, in send order, followed by end of stream.
pub fn spawn_fibonacci_feed(pool: &TaskPool, count: usize, capacity: usize) -> Result<Receiver<u64>> {
    let (tx, rx) = channel::bounded(capacity);

    pool.spawn("fib-feed", move || {
        let mut sequence = Fibonacci::new();
        for index in 0..count {
            let term = sequence.next_term();
            if let Err(err) = tx.send(term) {
                error!("feed stopped after {index} terms: {err}");
                return;
            }
            trace!("fed term {index}: {term}");
        }
        if let Err(err) = tx.close() {
            error!("feed close failed: {err}");
        }
    })?;

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelState;

    #[test]
    fn test_feed_delivers_sequence_in_order_then_closes() {
        let pool = TaskPool::new("test");
        let feed = spawn_fibonacci_feed(&pool, 10, 10).unwrap();

        let terms: Vec<u64> = feed.iter().collect();
        assert_eq!(terms, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);

        // Closed and drained: no extra values, no blocking.
        assert_eq!(feed.recv(), None);
        assert_eq!(feed.state(), ChannelState::Closed);
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_feed_respects_small_capacities() {
        let pool = TaskPool::new("test");
        let feed = spawn_fibonacci_feed(&pool, 10, 2).unwrap();
        assert_eq!(feed.iter().count(), 10);
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_feed_fills_its_buffer_without_a_consumer() {
        let pool = TaskPool::new("test");
        // Capacity equals count, so the producer runs to completion and
        // closes before anything is drained.
        let feed = spawn_fibonacci_feed(&pool, 10, 10).unwrap();
        pool.shutdown().unwrap();

        assert_eq!(feed.state(), ChannelState::Closing);
        assert_eq!(feed.iter().count(), 10);
        assert_eq!(feed.state(), ChannelState::Closed);
    }
}
