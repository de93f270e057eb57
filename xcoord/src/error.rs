use thiserror::Error;

/// Errors surfaced by channels, pools, and the coordination patterns.
#[derive(Debug, Error)]
pub enum Error {
    /// The channel was closed by a producer; sending or closing again is invalid.
    #[error("channel is closed")]
    ChannelClosed,

    /// Non-blocking receive found the channel open but empty.
    #[error("channel is empty")]
    Empty,

    /// Non-blocking send found the buffer at capacity.
    #[error("channel buffer is full")]
    Full,

    /// Every peer endpoint was dropped without an explicit close.
    #[error("all peer endpoints disconnected")]
    Disconnected,

    /// A bounded wait elapsed before any channel event arrived.
    #[error("timed out waiting for a channel event")]
    Timeout,

    /// A joined task terminated by panicking.
    #[error("task `{0}` panicked")]
    TaskPanicked(String),

    /// The operating system refused to spawn a worker thread.
    #[error("failed to spawn task: {0}")]
    Spawn(#[from] std::io::Error),

    /// A partition point outside the sequence bounds.
    #[error("split index {index} out of bounds for sequence of length {len}")]
    SplitOutOfBounds {
        /// Requested split position.
        index: usize,
        /// Length of the sequence being partitioned.
        len: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
