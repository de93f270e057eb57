//! # XCoord - Bounded Channel Task Coordination
//!
//! XCoord runs fixed sets of worker tasks that communicate exclusively
//! through typed, capacity-bounded channels, and supervises them with
//! multiplexed waits. It provides:
//!
//! - **Bounded channels**: zero capacity for synchronous rendezvous,
//!   N slots for a FIFO buffer with blocking backpressure
//! - **Explicit close protocol**: producers close, consumers observe the
//!   closed-and-drained signal; double close and send-after-close are
//!   rejected as errors
//! - **Fan-out/fan-in**: partitioned summation combined over one result
//!   channel
//! - **Cancellable generation**: an unbounded sequence producer driven
//!   entirely by consumption, stopped by a one-shot quit signal
//! - **Timer multiplexing**: recurring tick and one-shot timeout branches
//!   with a non-blocking fallback
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Application (runner)                  │
//! ├─────────────────────────────────────────────────────────┤
//! │                     Pattern Layer                       │
//! │  ┌─────────┐ ┌──────────┐ ┌───────────┐ ┌──────────┐    │
//! │  │ Fan-in  │ │ Pipeline │ │ Generator │ │  Ticker  │    │
//! │  └─────────┘ └──────────┘ └───────────┘ └──────────┘    │
//! ├─────────────────────────────────────────────────────────┤
//! │                  Coordination Layer                     │
//! │  ┌──────────────┐ ┌────────────┐ ┌──────────────────┐   │
//! │  │   Channels   │ │   Signals  │ │      Timers      │   │
//! │  └──────────────┘ └────────────┘ └──────────────────┘   │
//! ├─────────────────────────────────────────────────────────┤
//! │                      Task Layer                         │
//! │  ┌─────────────────────────────────────────────────┐    │
//! │  │        TaskPool (named workers, shutdown)       │    │
//! │  └─────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks share no mutable memory; every synchronization point is a
//! channel send, a channel receive, or a multiplexed wait over several of
//! them. Cancellation is cooperative: a task observes its quit signal (or
//! the closure of its input) at a suspension point and winds itself down.
//!
//! ## Example
//!
//! ```rust,ignore
//! use xcoord::{partitioned_sum, TaskPool};
//!
//! let pool = TaskPool::new("app");
//! let total = partitioned_sum(&pool, &[7, 2, 8, -9, 4, 0])?;
//! assert_eq!(total, 12);
//! pool.shutdown()?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::time::Duration;

pub mod channel;
pub mod config;
pub mod error;
pub mod fanin;
pub mod generator;
pub mod pipeline;
pub mod pool;
pub mod sequence;
pub mod signal;
pub mod ticker;
pub mod timer;

// Re-export commonly used types
pub use channel::{ChannelState, Receiver, Sender, bounded};
pub use config::Config;
pub use error::{Error, Result};
pub use fanin::{partitioned_sum, partitioned_sum_at, partitioned_sum_deadline};
pub use generator::spawn_fibonacci_generator;
pub use pipeline::spawn_fibonacci_feed;
pub use pool::TaskPool;
pub use sequence::Fibonacci;
pub use signal::{Stop, StopListener};
pub use ticker::{TickLoopReport, run_tick_loop};

/// Default capacity of the bounded feed queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Default interval between recurring tick events.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Default one-shot timeout bounding the timer loop.
pub const DEFAULT_RUN_DURATION: Duration = Duration::from_millis(500);

/// Default yield between idle polls of the timer loop.
pub const DEFAULT_POLL_BACKOFF: Duration = Duration::from_millis(50);

/// Default bounded wait for collecting fan-in results.
pub const DEFAULT_COLLECT_TIMEOUT: Duration = Duration::from_secs(1);
